use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No valid words found, please check the input")]
    EmptyWordList,
    #[error("Invalid word index")]
    InvalidIndex,
    #[error("Round state is inconsistent")]
    InvalidRound,
}

pub type Result<T> = core::result::Result<T, GameError>;
