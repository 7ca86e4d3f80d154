use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures never expose a partially decoded payload: the
/// caller gets an error kind and nothing else.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// Signing failed. Indicates misconfiguration; callers surface this as
    /// an internal error with no recovery path.
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    /// The embedded expiry has passed.
    #[error("Token is expired")]
    Expired,

    /// Bad signature, tampered or malformed payload, or a payload without a
    /// user identifier.
    #[error("Token is invalid: {0}")]
    Invalid(String),
}
