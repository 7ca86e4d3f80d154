use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::PostData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::post::models::PostText;
use crate::post::ports::PostServicePort;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Json(body): Json<CreatePostRequestBody>,
) -> Result<(StatusCode, Json<PostData>), ApiError> {
    let text = body.validate().map_err(ApiError::Validation)?;

    state
        .post_service
        .create_post(&identity.user_id, text)
        .await
        .map_err(ApiError::from)
        .map(|ref post| (StatusCode::CREATED, Json(post.into())))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequestBody {
    #[serde(default)]
    text: String,
}

impl CreatePostRequestBody {
    fn validate(self) -> Result<PostText, Vec<String>> {
        PostText::new(self.text).map_err(|e| vec![e.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_text() {
        let body = CreatePostRequestBody {
            text: "   ".to_string(),
        };
        assert_eq!(
            body.validate().unwrap_err(),
            vec!["Text is required".to_string()]
        );
    }
}
