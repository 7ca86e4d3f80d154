use thiserror::Error;

/// Top-level error for profile operations.
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    #[error("There is no profile for this user")]
    NotFound(String),

    /// The acting user's account no longer exists.
    #[error("User not found")]
    OwnerNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
