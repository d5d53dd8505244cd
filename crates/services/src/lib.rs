#![forbid(unsafe_code)]

pub mod game;
pub mod sessions;
pub mod ticker;

pub use quiz_core::Clock;

pub use game::GameService;
pub use sessions::{GameSession, QUESTIONS_PER_GAME, draw_questions};
pub use ticker::{Tick, Ticker};
