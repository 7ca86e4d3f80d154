use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Coordinates password verification and token issuance.
///
/// Constructed once at startup from the configured signing secret and shared
/// read-only across requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed bearer token for the authenticated user.
    pub token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// The supplied password does not match the stored hash. Callers must
    /// report this with the same wording and status as an unknown user, so
    /// a rejection never reveals which half of the credential pair failed.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create an authenticator from the token signing secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - hashing failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash and, on match, issue a token
    /// for the user.
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match
    /// * `Password` - the stored hash could not be checked
    /// * `Token` - signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_match = self.password_hasher.verify(password, stored_hash)?;

        if !is_match {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let token = self.token_codec.issue(user_id)?;

        Ok(AuthenticationResult { token })
    }

    /// Issue a token without checking a password.
    ///
    /// Used by registration, where the caller has just created the account.
    ///
    /// # Errors
    /// * `TokenError` - signing failed
    pub fn issue_token(&self, user_id: &str) -> Result<String, TokenError> {
        self.token_codec.issue(user_id)
    }

    /// Verify a token and return the embedded user id.
    ///
    /// # Errors
    /// * `TokenError` - signature, payload, or expiry check failed
    pub fn verify_token(&self, token: &str) -> Result<String, TokenError> {
        self.token_codec.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn authenticate_success_yields_verifiable_token() {
        let authenticator = Authenticator::new(SECRET);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "507f1f77bcf86cd799439011")
            .expect("Authentication failed");

        let user_id = authenticator
            .verify_token(&result.token)
            .expect("Token verification failed");
        assert_eq!(user_id, "507f1f77bcf86cd799439011");
    }

    #[test]
    fn authenticate_wrong_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn authenticate_unparseable_hash_is_not_a_credential_error() {
        let authenticator = Authenticator::new(SECRET);

        let result = authenticator.authenticate("password", "corrupt-hash", "user123");
        assert!(matches!(result, Err(AuthenticationError::Password(_))));
    }

    #[test]
    fn issue_token_roundtrip() {
        let authenticator = Authenticator::new(SECRET);

        let token = authenticator
            .issue_token("user123")
            .expect("Failed to issue token");
        let user_id = authenticator
            .verify_token(&token)
            .expect("Failed to verify token");

        assert_eq!(user_id, "user123");
    }

    #[test]
    fn verify_garbage_token_fails() {
        let authenticator = Authenticator::new(SECRET);

        assert!(authenticator.verify_token("invalid.token.here").is_err());
    }
}
