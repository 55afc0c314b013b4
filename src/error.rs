use thiserror::Error;

/// Reasons the customer file could not be loaded. Either one aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid format on line {line}: {reason}")]
    Format { line: usize, reason: String },
}

impl LoadError {
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        LoadError::Format { line, reason: reason.into() }
    }
}
