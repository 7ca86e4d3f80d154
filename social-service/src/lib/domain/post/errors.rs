use thiserror::Error;

/// Error for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid post id: {0}")]
    InvalidFormat(String),
}

/// Error for post text validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostTextError {
    #[error("Text is required")]
    Empty,
}

/// Top-level error for post operations.
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("Invalid post id: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("{0}")]
    InvalidText(#[from] PostTextError),

    #[error("Post not found")]
    NotFound(String),

    /// The acting user's account no longer exists (valid token, deleted
    /// user).
    #[error("User not found")]
    AuthorNotFound(String),

    /// Only the author may delete a post.
    #[error("User not authorized")]
    NotPostAuthor,

    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post has not yet been liked")]
    NotYetLiked,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
