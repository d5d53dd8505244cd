mod board;
mod category;
mod leaderboard;
mod phase;
mod question;
mod results;

pub use board::{Board, BoardError, Slot};
pub use category::{Category, CategoryId, CategoryRegistry, ParseCategoryError};
pub use leaderboard::LeaderboardEntry;
pub use phase::Phase;
pub use question::{BankError, Question, QuestionBank};
pub use results::{GameResults, ResultsError};
