use thiserror::Error;

use crate::model::{BankError, BoardError, ResultsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Results(#[from] ResultsError),
}
