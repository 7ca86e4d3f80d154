use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token lifetime in seconds (100 hours), fixed at issuance.
pub const TOKEN_TTL_SECS: i64 = 360_000;

/// Claims carried by a bearer token.
///
/// The payload deliberately carries nothing but the user identifier and the
/// issuance/expiry timestamps. Anything else about the user is looked up
/// fresh on each request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub user: UserClaim,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// User identity embedded in the token payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserClaim {
    pub id: String,
}

impl Claims {
    /// Build claims for a user, expiring [`TOKEN_TTL_SECS`] from now.
    pub fn for_user(user_id: impl Into<String>) -> Self {
        let now = Utc::now().timestamp();
        Self {
            user: UserClaim {
                id: user_id.into(),
            },
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        }
    }

    /// Whether `exp` lies strictly before the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_user_embeds_id_and_fixed_ttl() {
        let claims = Claims::for_user("507f1f77bcf86cd799439011");

        assert_eq!(claims.user.id, "507f1f77bcf86cd799439011");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn is_expired_boundaries() {
        let claims = Claims {
            user: UserClaim {
                id: "user123".to_string(),
            },
            iat: 0,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // exactly at expiry
        assert!(claims.is_expired(1001));
    }
}
