//! Authentication building blocks for the social backend.
//!
//! - Password hashing (Argon2id, PHC string format)
//! - Bearer token issuance and verification (HS256, fixed 100-hour lifetime)
//! - An [`Authenticator`] coordinating the two for the login flow
//!
//! Tokens are stateless: validity is decided entirely by the signature and
//! the embedded expiry, never by server-side session state.
//!
//! # Examples
//!
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash the password for storage.
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and issue a token.
//! let result = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Gate: verify the token and recover the user id.
//! let user_id = auth.verify_token(&result.token).unwrap();
//! assert_eq!(user_id, "user123");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TOKEN_TTL_SECS;
