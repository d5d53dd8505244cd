mod draw;
mod service;
pub mod view;

pub use draw::draw_questions;
pub use service::{GameSession, QUESTIONS_PER_GAME};
