use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {name}={value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: usize,
        reason: String,
    },

    #[error("Input too large: {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl SegError {
    pub(crate) fn invalid(name: &'static str, value: usize, reason: impl Into<String>) -> Self {
        SegError::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SegError>;
