use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::post::models::Comment;
use crate::post::models::Like;
use crate::post::models::Post;

pub mod comment_post;
pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod like_post;
pub mod list_posts;
pub mod unlike_post;

/// Wire representation of a post, shared by the feed handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub likes: Vec<LikeData>,
    pub comments: Vec<CommentData>,
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            user: post.author.to_string(),
            text: post.text.as_str().to_string(),
            name: post.author_name.clone(),
            avatar: post.author_avatar.clone(),
            likes: post.likes.iter().map(LikeData::from).collect(),
            comments: post.comments.iter().map(CommentData::from).collect(),
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeData {
    pub user: String,
}

impl From<&Like> for LikeData {
    fn from(like: &Like) -> Self {
        Self {
            user: like.user.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentData {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            user: comment.author.to_string(),
            text: comment.text.as_str().to_string(),
            name: comment.author_name.clone(),
            avatar: comment.author_avatar.clone(),
            created_at: comment.created_at,
        }
    }
}
