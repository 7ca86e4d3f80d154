use std::sync::Arc;

use async_trait::async_trait;

use crate::post::errors::PostError;
use crate::post::models::Comment;
use crate::post::models::Like;
use crate::post::models::Post;
use crate::post::models::PostId;
use crate::post::models::PostText;
use crate::post::ports::PostRepository;
use crate::post::ports::PostServicePort;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

/// Domain service for the post feed.
///
/// Owns the post repository plus the user repository, which it reads to
/// snapshot author names and avatars onto posts and comments.
pub struct PostService<PR, UR>
where
    PR: PostRepository,
    UR: UserRepository,
{
    posts: Arc<PR>,
    users: Arc<UR>,
}

impl<PR, UR> PostService<PR, UR>
where
    PR: PostRepository,
    UR: UserRepository,
{
    pub fn new(posts: Arc<PR>, users: Arc<UR>) -> Self {
        Self { posts, users }
    }

    async fn acting_user(&self, id: &UserId) -> Result<User, PostError> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?
            .ok_or(PostError::AuthorNotFound(id.to_string()))
    }

    async fn existing_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<PR, UR> PostServicePort for PostService<PR, UR>
where
    PR: PostRepository,
    UR: UserRepository,
{
    async fn create_post(&self, author: &UserId, text: PostText) -> Result<Post, PostError> {
        let user = self.acting_user(author).await?;
        let post = Post::new(&user, text);
        self.posts.create(post).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, PostError> {
        self.posts.find_all().await
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.existing_post(id).await
    }

    async fn delete_post(&self, id: &PostId, requester: &UserId) -> Result<(), PostError> {
        let post = self.existing_post(id).await?;

        if post.author != *requester {
            return Err(PostError::NotPostAuthor);
        }

        self.posts.delete(id).await
    }

    async fn like_post(&self, id: &PostId, user: &UserId) -> Result<Vec<Like>, PostError> {
        let post = self.existing_post(id).await?;

        if post.is_liked_by(user) {
            return Err(PostError::AlreadyLiked);
        }

        self.posts.add_like(id, user).await
    }

    async fn unlike_post(&self, id: &PostId, user: &UserId) -> Result<Vec<Like>, PostError> {
        let post = self.existing_post(id).await?;

        if !post.is_liked_by(user) {
            return Err(PostError::NotYetLiked);
        }

        self.posts.remove_like(id, user).await
    }

    async fn comment_post(
        &self,
        id: &PostId,
        author: &UserId,
        text: PostText,
    ) -> Result<Vec<Comment>, PostError> {
        self.existing_post(id).await?;
        let user = self.acting_user(author).await?;

        let comment = Comment::new(&user, text);
        self.posts.add_comment(id, comment).await
    }
}
