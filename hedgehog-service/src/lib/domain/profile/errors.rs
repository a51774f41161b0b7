use thiserror::Error;

/// Error for profile image URL validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImageUrlError {
    #[error("Image must be an absolute http or https URL")]
    InvalidFormat,
}

/// Top-level error for profile operations
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    #[error("Invalid image: {0}")]
    InvalidImage(#[from] ImageUrlError),

    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
