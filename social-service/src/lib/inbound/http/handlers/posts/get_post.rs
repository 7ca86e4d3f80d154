use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::PostData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::post::errors::PostError;
use crate::post::models::PostId;
use crate::post::ports::PostServicePort;

pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<PostData>, ApiError> {
    let post_id = PostId::from_string(&post_id)
        .map_err(PostError::from)
        .map_err(ApiError::from)?;

    state
        .post_service
        .get_post(&post_id)
        .await
        .map_err(ApiError::from)
        .map(|ref post| Json(post.into()))
}
