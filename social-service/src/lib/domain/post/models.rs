use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::post::errors::PostIdError;
use crate::post::errors::PostTextError;
use crate::user::models::User;
use crate::user::models::UserId;

/// Post aggregate entity.
///
/// The author's display name and avatar are denormalized onto the post at
/// creation time, so the feed renders without joining back to users.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub author: UserId,
    pub text: PostText,
    pub author_name: String,
    pub author_avatar: Option<String>,
    /// One like per user, newest first.
    pub likes: Vec<Like>,
    /// Newest first.
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Build a new post for an author, snapshotting their name and avatar.
    pub fn new(author: &User, text: PostText) -> Self {
        Self {
            id: PostId::new(),
            author: author.id,
            text,
            author_name: author.name.as_str().to_string(),
            author_avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether the given user has already liked this post.
    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.iter().any(|like| like.user == *user_id)
    }
}

/// Post unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a post ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        Uuid::parse_str(s)
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post body text value type. Non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    /// Create validated post text.
    ///
    /// # Errors
    /// * `Empty` - text is empty or whitespace only
    pub fn new(text: String) -> Result<Self, PostTextError> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(PostTextError::Empty);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single user's like on a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub user: UserId,
    pub liked_at: DateTime<Utc>,
}

/// Comment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comment on a post, with the commenter's name and avatar snapshotted the
/// same way the post snapshots its author's.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub author: UserId,
    pub text: PostText,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &User, text: PostText) -> Self {
        Self {
            id: CommentId::new(),
            author: author.id,
            text,
            author_name: author.name.as_str().to_string(),
            author_avatar: author.avatar.clone(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_text_rejects_whitespace_only() {
        assert!(matches!(
            PostText::new("   ".to_string()),
            Err(PostTextError::Empty)
        ));
        assert_eq!(
            PostText::new("  hello  ".to_string()).unwrap().as_str(),
            "hello"
        );
    }

    #[test]
    fn is_liked_by_checks_the_like_set() {
        let user = crate::user::models::User {
            id: UserId::new(),
            name: crate::user::models::DisplayName::new("Author".to_string()).unwrap(),
            email: crate::user::models::EmailAddress::new("a@example.com".to_string()).unwrap(),
            avatar: None,
            password_hash: "$argon2id$hash".to_string(),
            created_at: Utc::now(),
        };
        let mut post = Post::new(&user, PostText::new("hello".to_string()).unwrap());

        let liker = UserId::new();
        assert!(!post.is_liked_by(&liker));

        post.likes.push(Like {
            user: liker,
            liked_at: Utc::now(),
        });
        assert!(post.is_liked_by(&liker));
        assert!(!post.is_liked_by(&UserId::new()));
    }
}
