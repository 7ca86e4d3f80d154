use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::DisplayName;
use crate::user::models::EmailAddress;
use crate::user::models::RegisterUserCommand;
use crate::user::ports::UserServicePort;

const PASSWORD_MIN_LENGTH: usize = 6;

/// Register a new account and log it straight in: the response carries a
/// bearer token from the same issuance path as login.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<Json<RegisterResponseData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::Validation)?;

    let user = state
        .user_service
        .register_user(command)
        .await
        .map_err(ApiError::from)?;

    let token = state
        .authenticator
        .issue_token(&user.id.to_string())
        .map_err(|e| ApiError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(Json(RegisterResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    avatar: Option<String>,
}

impl RegisterRequestBody {
    /// Check every field and report all failures at once.
    fn try_into_command(self) -> Result<RegisterUserCommand, Vec<String>> {
        let mut errors = Vec::new();

        let name = match DisplayName::new(self.name) {
            Ok(name) => Some(name),
            Err(e) => {
                errors.push(e.to_string());
                None
            }
        };

        let email = match EmailAddress::new(self.email) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push("Please include a valid email".to_string());
                None
            }
        };

        if self.password.chars().count() < PASSWORD_MIN_LENGTH {
            errors.push("Please enter a password with 6 or more characters".to_string());
        }

        match (name, email, errors.is_empty()) {
            (Some(name), Some(email), true) => Ok(RegisterUserCommand::new(
                name,
                email,
                self.avatar,
                self.password,
            )),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str, email: &str, password: &str) -> RegisterRequestBody {
        RegisterRequestBody {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            avatar: None,
        }
    }

    #[test]
    fn try_into_command_accepts_valid_input() {
        let command = body("Jane Doe", "jane@example.com", "secret123")
            .try_into_command()
            .unwrap();
        assert_eq!(command.name.as_str(), "Jane Doe");
        assert_eq!(command.email.as_str(), "jane@example.com");
    }

    #[test]
    fn try_into_command_collects_all_field_errors() {
        let errors = body("", "nope", "abc").try_into_command().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Name is required".to_string(),
                "Please include a valid email".to_string(),
                "Please enter a password with 6 or more characters".to_string(),
            ]
        );
    }

    #[test]
    fn try_into_command_enforces_password_length() {
        let errors = body("Jane Doe", "jane@example.com", "12345")
            .try_into_command()
            .unwrap_err();
        assert_eq!(
            errors,
            vec!["Please enter a password with 6 or more characters".to_string()]
        );
    }
}
