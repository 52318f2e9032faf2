use thiserror::Error;

/// Common result type used across the crate.
pub type Result<T> = std::result::Result<T, StatCsvError>;

/// Unified error enum surfaced by all public APIs.
#[derive(Error, Debug)]
pub enum StatCsvError {
    #[error("qualified name {name:?} needs {len} characters, limit is {max_len}")]
    NameTooLong {
        name: String,
        len: usize,
        max_len: usize,
    },
    #[error("sink error: {0}")]
    Io(#[from] std::io::Error),
}
