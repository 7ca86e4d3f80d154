use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::post::errors::PostError;
use crate::post::models::PostId;
use crate::post::ports::PostServicePort;

/// Delete one's own post. A non-author gets a 401 and the post survives.
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let post_id = PostId::from_string(&post_id)
        .map_err(PostError::from)
        .map_err(ApiError::from)?;

    state
        .post_service
        .delete_post(&post_id, &identity.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
