use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::post::errors::PostError;
use crate::profile::errors::ProfileError;
use crate::user::errors::UserError;

pub mod auth;
pub mod posts;
pub mod profiles;
pub mod users;

/// Error translated at the handler boundary.
///
/// Every error a handler can produce maps to one of these; nothing
/// propagates unhandled to the transport layer. The wire shape is always
/// `{ "errors": [ { "msg": ... } ] }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Field-level input failures, one message per failing field. The store
    /// is never touched.
    Validation(Vec<String>),
    /// Domain rejection of an otherwise well-formed request (bad
    /// credentials, duplicate email, double like).
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    /// Unexpected failure. The message is logged server-side; the client
    /// sees a fixed generic body.
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, messages) = match self {
            ApiError::Validation(msgs) => (StatusCode::BAD_REQUEST, msgs),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, vec![msg]),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, vec![msg]),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, vec![msg]),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Server error".to_string()],
                )
            }
        };

        (status, Json(ErrorResponseBody::new(messages))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByEmail(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::EmailAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            UserError::InvalidUserId(_) | UserError::InvalidName(_) | UserError::InvalidEmail(_) => {
                ApiError::Validation(vec![err.to_string()])
            }
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            // A malformed id cannot name an existing post.
            PostError::InvalidPostId(_) => ApiError::NotFound("Post not found".to_string()),
            PostError::InvalidText(_) => ApiError::Validation(vec![err.to_string()]),
            PostError::NotFound(_) | PostError::AuthorNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            PostError::NotPostAuthor => ApiError::Unauthorized(err.to_string()),
            PostError::AlreadyLiked | PostError::NotYetLiked => {
                ApiError::BadRequest(err.to_string())
            }
            PostError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound(_) | ProfileError::OwnerNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            ProfileError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// `{ "errors": [ { "msg": "..." } ] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponseBody {
    pub errors: Vec<ErrorMessage>,
}

impl ErrorResponseBody {
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            errors: messages.into_iter().map(|msg| ErrorMessage { msg }).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_shape() {
        let body = ErrorResponseBody::new(vec![
            "Please include a valid email".to_string(),
            "Password is required".to_string(),
        ]);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "errors": [
                    { "msg": "Please include a valid email" },
                    { "msg": "Password is required" },
                ]
            })
        );
    }

    #[test]
    fn unknown_email_and_wrong_password_map_identically() {
        // Both credential sub-cases must be indistinguishable on the wire.
        let unknown_email = ApiError::BadRequest("Invalid credentials".to_string());
        let wrong_password = ApiError::BadRequest("Invalid credentials".to_string());
        assert_eq!(unknown_email, wrong_password);
    }

    #[test]
    fn internal_errors_hide_detail() {
        let response =
            ApiError::InternalServerError("connection refused at 10.0.0.5".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn post_error_statuses() {
        assert_eq!(
            ApiError::from(PostError::AlreadyLiked),
            ApiError::BadRequest("Post already liked".to_string())
        );
        assert_eq!(
            ApiError::from(PostError::NotYetLiked),
            ApiError::BadRequest("Post has not yet been liked".to_string())
        );
        assert_eq!(
            ApiError::from(PostError::NotPostAuthor),
            ApiError::Unauthorized("User not authorized".to_string())
        );
        assert_eq!(
            ApiError::from(PostError::NotFound("id".to_string())),
            ApiError::NotFound("Post not found".to_string())
        );
    }

    #[test]
    fn deleted_user_probe_maps_to_not_found() {
        assert_eq!(
            ApiError::from(UserError::NotFound("id".to_string())),
            ApiError::NotFound("User not found".to_string())
        );
    }
}
