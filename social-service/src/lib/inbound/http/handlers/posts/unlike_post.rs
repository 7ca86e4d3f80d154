use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::LikeData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::post::errors::PostError;
use crate::post::models::PostId;
use crate::post::ports::PostServicePort;

/// Withdraw a like previously recorded by this user.
pub async fn unlike_post(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<LikeData>>, ApiError> {
    let post_id = PostId::from_string(&post_id)
        .map_err(PostError::from)
        .map_err(ApiError::from)?;

    state
        .post_service
        .unlike_post(&post_id, &identity.user_id)
        .await
        .map_err(ApiError::from)
        .map(|likes| Json(likes.iter().map(LikeData::from).collect()))
}
