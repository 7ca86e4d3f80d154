use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ProfileData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileServicePort;

/// The caller's own profile, or 404 if they have none.
pub async fn get_my_profile(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> Result<Json<ProfileData>, ApiError> {
    state
        .profile_service
        .get_profile_for_user(&identity.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref view| Json(view.into()))
}
