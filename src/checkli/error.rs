use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckliError {
    #[error("No item at index {index} (the list has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CheckliError>;
