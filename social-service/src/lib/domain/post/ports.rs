use async_trait::async_trait;

use crate::post::errors::PostError;
use crate::post::models::Comment;
use crate::post::models::Like;
use crate::post::models::Post;
use crate::post::models::PostId;
use crate::post::models::PostText;
use crate::user::models::UserId;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a post for an author, snapshotting their name and avatar.
    ///
    /// # Errors
    /// * `AuthorNotFound` - the acting user no longer exists
    /// * `DatabaseError` - store operation failed
    async fn create_post(&self, author: &UserId, text: PostText) -> Result<Post, PostError>;

    /// All posts, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn list_posts(&self) -> Result<Vec<Post>, PostError>;

    /// A single post with its likes and comments.
    ///
    /// # Errors
    /// * `NotFound` - post does not exist
    /// * `DatabaseError` - store operation failed
    async fn get_post(&self, id: &PostId) -> Result<Post, PostError>;

    /// Delete a post. Only its author may do so; a rejection deletes
    /// nothing.
    ///
    /// # Errors
    /// * `NotFound` - post does not exist
    /// * `NotPostAuthor` - requester is not the author
    /// * `DatabaseError` - store operation failed
    async fn delete_post(&self, id: &PostId, requester: &UserId) -> Result<(), PostError>;

    /// Record a like; at most one per user per post. Returns the updated
    /// like list, newest first.
    ///
    /// # Errors
    /// * `NotFound` - post does not exist
    /// * `AlreadyLiked` - this user already liked the post
    /// * `DatabaseError` - store operation failed
    async fn like_post(&self, id: &PostId, user: &UserId) -> Result<Vec<Like>, PostError>;

    /// Remove a like. Returns the updated like list.
    ///
    /// # Errors
    /// * `NotFound` - post does not exist
    /// * `NotYetLiked` - this user has no like to remove
    /// * `DatabaseError` - store operation failed
    async fn unlike_post(&self, id: &PostId, user: &UserId) -> Result<Vec<Like>, PostError>;

    /// Append a comment, snapshotting the commenter's name and avatar.
    /// Returns the updated comment list, newest first.
    ///
    /// # Errors
    /// * `NotFound` - post does not exist
    /// * `AuthorNotFound` - the acting user no longer exists
    /// * `DatabaseError` - store operation failed
    async fn comment_post(
        &self,
        id: &PostId,
        author: &UserId,
        text: PostText,
    ) -> Result<Vec<Comment>, PostError>;
}

/// Persistence operations for the post aggregate.
///
/// Likes and comments are children of a post; the mutation methods return
/// the updated child list so callers need no second read.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist a new post.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn create(&self, post: Post) -> Result<Post, PostError>;

    /// All posts with likes and comments, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_all(&self) -> Result<Vec<Post>, PostError>;

    /// One post with likes and comments (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// Remove a post and its children.
    ///
    /// # Errors
    /// * `NotFound` - post does not exist
    /// * `DatabaseError` - store operation failed
    async fn delete(&self, id: &PostId) -> Result<(), PostError>;

    /// Insert a like and return the post's like list, newest first.
    ///
    /// # Errors
    /// * `AlreadyLiked` - the like already exists
    /// * `DatabaseError` - store operation failed
    async fn add_like(&self, id: &PostId, user: &UserId) -> Result<Vec<Like>, PostError>;

    /// Remove a like and return the post's like list.
    ///
    /// # Errors
    /// * `NotYetLiked` - no like to remove
    /// * `DatabaseError` - store operation failed
    async fn remove_like(&self, id: &PostId, user: &UserId) -> Result<Vec<Like>, PostError>;

    /// Insert a comment and return the post's comment list, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn add_comment(&self, id: &PostId, comment: Comment) -> Result<Vec<Comment>, PostError>;
}
