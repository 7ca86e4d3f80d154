use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::ports::UserServicePort;

/// Authenticate with email + password and receive a bearer token.
///
/// Unknown email and wrong password produce byte-identical rejections, so a
/// response never reveals which half of the credential pair failed.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<LoginResponseData>, ApiError> {
    let (email, password) = body.validate().map_err(ApiError::Validation)?;

    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByEmail(_) => {
                ApiError::BadRequest("Invalid credentials".to_string())
            }
            other => ApiError::from(other),
        })?;

    let result = state
        .authenticator
        .authenticate(&password, &user.password_hash, &user.id.to_string())
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::BadRequest("Invalid credentials".to_string())
            }
            auth::AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::Token(err) => {
                ApiError::InternalServerError(format!("Token issuance failed: {}", err))
            }
        })?;

    Ok(Json(LoginResponseData {
        token: result.token,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl LoginRequestBody {
    /// Check both fields and report every failure at once; nothing past
    /// this point runs on invalid input.
    fn validate(self) -> Result<(EmailAddress, String), Vec<String>> {
        let mut errors = Vec::new();

        let email = match EmailAddress::new(self.email) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push("Please include a valid email".to_string());
                None
            }
        };

        if self.password.is_empty() {
            errors.push("Password is required".to_string());
        }

        match (email, errors.is_empty()) {
            (Some(email), true) => Ok((email, self.password)),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(email: &str, password: &str) -> LoginRequestBody {
        LoginRequestBody {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn validate_accepts_well_formed_credentials() {
        let (email, password) = body("user@example.com", "hunter42").validate().unwrap();
        assert_eq!(email.as_str(), "user@example.com");
        assert_eq!(password, "hunter42");
    }

    #[test]
    fn validate_collects_every_failing_field() {
        let errors = body("not-an-email", "").validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Please include a valid email".to_string(),
                "Password is required".to_string(),
            ]
        );
    }

    #[test]
    fn validate_reports_missing_password_alone() {
        let errors = body("user@example.com", "").validate().unwrap_err();
        assert_eq!(errors, vec!["Password is required".to_string()]);
    }
}
