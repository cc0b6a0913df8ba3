use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Malformed record: expected {expected} fields, found {found}")]
    MalformedRecord { expected: usize, found: usize },

    #[error("Validation failed: {0}")]
    Validation(String),
}
