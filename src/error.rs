use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("page size must be a positive integer, got {0}")]
    InvalidPageSize(usize),
    #[error("unknown row action \"{0}\"")]
    UnknownAction(String),
}
