use axum::extract::State;
use axum::Json;

use super::PostData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::post::ports::PostServicePort;

/// The whole feed, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostData>>, ApiError> {
    state
        .post_service
        .list_posts()
        .await
        .map_err(ApiError::from)
        .map(|posts| Json(posts.iter().map(PostData::from).collect()))
}
