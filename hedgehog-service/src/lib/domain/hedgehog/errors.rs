use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HedgehogNameError {
    #[error("Name cannot be empty")]
    Empty,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgeError {
    #[error("Age must be a finite, non-negative number")]
    OutOfRange,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColorTypeError {
    #[error("Color type cannot be empty")]
    Empty,
}

/// Top-level error for hedgehog operations
#[derive(Debug, Clone, Error)]
pub enum HedgehogError {
    #[error("Invalid name: {0}")]
    InvalidName(#[from] HedgehogNameError),

    #[error("Invalid age: {0}")]
    InvalidAge(#[from] AgeError),

    #[error("Invalid color type: {0}")]
    InvalidColorType(#[from] ColorTypeError),

    #[error("Invalid color type. Cannot be None.")]
    MissingColorType,

    #[error("Hedgehog not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
