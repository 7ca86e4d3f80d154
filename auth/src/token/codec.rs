use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs and verifies bearer tokens (HS256).
///
/// Built once from the process-wide secret and shared read-only across
/// requests. A token is valid iff it was signed with this codec's secret,
/// its expiry has not passed, and its payload decodes to a user id; nothing
/// else affects validity.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec from the signing secret.
    ///
    /// The secret should be at least 32 bytes and come from configuration,
    /// never from code.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for a user, expiring
    /// [`TOKEN_TTL_SECS`](super::TOKEN_TTL_SECS) from now.
    ///
    /// # Errors
    /// * `SigningFailed` - the signing operation itself failed
    pub fn issue(&self, user_id: &str) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::for_user(user_id);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return the embedded user id.
    ///
    /// Checks the signature and the expiry with zero leeway. The payload is
    /// never trusted unless both checks pass.
    ///
    /// # Errors
    /// * `Expired` - the embedded expiry has passed
    /// * `Invalid` - bad signature, tampered or malformed payload, or an
    ///   empty user id
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        let user_id = token_data.claims.user.id;
        if user_id.is_empty() {
            return Err(TokenError::Invalid("missing user id".to_string()));
        }

        Ok(user_id)
    }
}
