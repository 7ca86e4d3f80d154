use axum::extract::State;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::models::User;
use crate::user::ports::UserServicePort;

/// Identity probe: the user record behind the presented token, minus the
/// password hash. A token whose user has since been deleted gets a 404.
pub async fn current_user(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> Result<Json<CurrentUserResponseData>, ApiError> {
    state
        .user_service
        .get_user(&identity.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| Json(user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserResponseData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for CurrentUserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
        }
    }
}
