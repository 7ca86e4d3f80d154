use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid user id: {0}")]
    InvalidFormat(String),
}

/// Error for DisplayName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisplayNameError {
    #[error("Name is required")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Please include a valid email")]
    InvalidFormat(String),
}

/// Top-level error for user operations.
///
/// The `#[error]` strings double as the client-facing messages; the HTTP
/// layer maps each variant to a status without rewording it.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid user id: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("{0}")]
    InvalidName(#[from] DisplayNameError),

    #[error("{0}")]
    InvalidEmail(#[from] EmailError),

    #[error("User not found")]
    NotFound(String),

    #[error("User not found")]
    NotFoundByEmail(String),

    #[error("User already exists")]
    EmailAlreadyExists(String),

    #[error("Password hashing failed: {0}")]
    Password(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
