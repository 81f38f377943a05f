use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Quiz service request failed: {0}")]
    Network(String),
    #[error("Quiz service answered with status {0}")]
    Status(u16),
    #[error("Not enough items to sample, requested {requested} but only {available} available")]
    InsufficientPool { requested: usize, available: usize },
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, TriviaError>;
