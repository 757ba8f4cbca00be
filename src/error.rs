use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Given number ({n}) is out of range [0,{max}]!")]
    OutOfRange { n: u64, max: u64 },

    #[error("{n}! does not fit in a 64-bit integer (use --engine bigint or --engine limbs)")]
    Overflow { n: u64 },

    #[error("Invalid name {name:?}: {ch:?} is not a letter")]
    InvalidName { name: String, ch: char },

    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
