use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated length field at offset {offset}")]
    TruncatedLength { offset: u64 },

    #[error(
        "truncated record at offset {offset}: declared {declared} payload bytes, only {available} available"
    )]
    TruncatedRecord {
        offset: u64,
        declared: u64,
        available: u64,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
