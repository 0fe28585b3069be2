use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Business settings are missing or cannot produce a finite slot sequence.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid service: {0}")]
    InvalidService(String),

    #[error("Time slot not available")]
    SlotUnavailable,

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
