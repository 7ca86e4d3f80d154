use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::CommentData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::post::errors::PostError;
use crate::post::models::PostId;
use crate::post::models::PostText;
use crate::post::ports::PostServicePort;

/// Comment on a post. Returns the updated comment list, newest first.
pub async fn comment_post(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
    Json(body): Json<CommentRequestBody>,
) -> Result<Json<Vec<CommentData>>, ApiError> {
    let post_id = PostId::from_string(&post_id)
        .map_err(PostError::from)
        .map_err(ApiError::from)?;
    let text = body.validate().map_err(ApiError::Validation)?;

    state
        .post_service
        .comment_post(&post_id, &identity.user_id, text)
        .await
        .map_err(ApiError::from)
        .map(|comments| Json(comments.iter().map(CommentData::from).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommentRequestBody {
    #[serde(default)]
    text: String,
}

impl CommentRequestBody {
    fn validate(self) -> Result<PostText, Vec<String>> {
        PostText::new(self.text).map_err(|e| vec![e.to_string()])
    }
}
