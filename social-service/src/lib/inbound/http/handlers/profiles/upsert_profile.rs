use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ProfileData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::profile::models::UpsertProfileCommand;
use crate::profile::ports::ProfileServicePort;

/// Create or replace the caller's profile.
pub async fn upsert_profile(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Json(body): Json<UpsertProfileRequestBody>,
) -> Result<Json<ProfileData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::Validation)?;

    state
        .profile_service
        .upsert_profile(&identity.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref view| Json(view.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpsertProfileRequestBody {
    #[serde(default)]
    status: String,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    skills: Vec<String>,
}

impl UpsertProfileRequestBody {
    fn try_into_command(self) -> Result<UpsertProfileCommand, Vec<String>> {
        let status = self.status.trim().to_string();
        if status.is_empty() {
            return Err(vec!["Status is required".to_string()]);
        }

        Ok(UpsertProfileCommand {
            status,
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            skills: self
                .skills
                .into_iter()
                .map(|skill| skill.trim().to_string())
                .filter(|skill| !skill.is_empty())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_into_command_requires_status() {
        let body = UpsertProfileRequestBody {
            status: "  ".to_string(),
            company: None,
            website: None,
            location: None,
            bio: None,
            skills: vec![],
        };
        assert_eq!(
            body.try_into_command().unwrap_err(),
            vec!["Status is required".to_string()]
        );
    }

    #[test]
    fn try_into_command_drops_blank_skills() {
        let body = UpsertProfileRequestBody {
            status: "Developer".to_string(),
            company: None,
            website: None,
            location: None,
            bio: None,
            skills: vec!["Rust".to_string(), "  ".to_string(), " SQL ".to_string()],
        };
        let command = body.try_into_command().unwrap();
        assert_eq!(command.skills, vec!["Rust".to_string(), "SQL".to_string()]);
    }
}
