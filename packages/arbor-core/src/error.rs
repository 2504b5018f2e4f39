use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("record at index {index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("unknown traversal strategy: {0}")]
    UnknownStrategy(String),
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),
}
