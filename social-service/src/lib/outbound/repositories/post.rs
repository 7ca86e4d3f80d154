use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::post::errors::PostError;
use crate::post::models::Comment;
use crate::post::models::CommentId;
use crate::post::models::Like;
use crate::post::models::Post;
use crate::post::models::PostId;
use crate::post::models::PostText;
use crate::post::ports::PostRepository;
use crate::user::models::UserId;

/// Posts with their likes and comments as child tables. Child lists are
/// returned newest first, matching the order the feed renders them.
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_post(
        row: &sqlx::postgres::PgRow,
        likes: Vec<Like>,
        comments: Vec<Comment>,
    ) -> Result<Post, PostError> {
        Ok(Post {
            id: PostId(row.get("id")),
            author: UserId(row.get("user_id")),
            text: PostText::new(row.get("text"))?,
            author_name: row.get("name"),
            author_avatar: row.get("avatar"),
            likes,
            comments,
            created_at: row.get("created_at"),
        })
    }

    fn row_to_like(row: &sqlx::postgres::PgRow) -> Like {
        Like {
            user: UserId(row.get("user_id")),
            liked_at: row.get("liked_at"),
        }
    }

    fn row_to_comment(row: &sqlx::postgres::PgRow) -> Result<Comment, PostError> {
        Ok(Comment {
            id: CommentId(row.get("id")),
            author: UserId(row.get("user_id")),
            text: PostText::new(row.get("text"))?,
            author_name: row.get("name"),
            author_avatar: row.get("avatar"),
            created_at: row.get("created_at"),
        })
    }

    async fn load_likes(&self, post_id: &PostId) -> Result<Vec<Like>, PostError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, liked_at
            FROM post_likes
            WHERE post_id = $1
            ORDER BY liked_at DESC
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_like).collect())
    }

    async fn load_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, PostError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, text, name, avatar, created_at
            FROM post_comments
            WHERE post_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_comment).collect()
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, user_id, text, name, avatar, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id.0)
        .bind(post.author.as_uuid())
        .bind(post.text.as_str())
        .bind(&post.author_name)
        .bind(post.author_avatar.as_deref())
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>, PostError> {
        let post_rows = sqlx::query(
            r#"
            SELECT id, user_id, text, name, avatar, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let post_ids: Vec<Uuid> = post_rows.iter().map(|r| r.get("id")).collect();

        let like_rows = sqlx::query(
            r#"
            SELECT post_id, user_id, liked_at
            FROM post_likes
            WHERE post_id = ANY($1)
            ORDER BY liked_at DESC
            "#,
        )
        .bind(&post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let comment_rows = sqlx::query(
            r#"
            SELECT id, post_id, user_id, text, name, avatar, created_at
            FROM post_comments
            WHERE post_id = ANY($1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(&post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let mut likes_by_post: HashMap<Uuid, Vec<Like>> = HashMap::new();
        for row in &like_rows {
            likes_by_post
                .entry(row.get("post_id"))
                .or_default()
                .push(Self::row_to_like(row));
        }

        let mut comments_by_post: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for row in &comment_rows {
            comments_by_post
                .entry(row.get("post_id"))
                .or_default()
                .push(Self::row_to_comment(row)?);
        }

        post_rows
            .iter()
            .map(|row| {
                let id: Uuid = row.get("id");
                Self::row_to_post(
                    row,
                    likes_by_post.remove(&id).unwrap_or_default(),
                    comments_by_post.remove(&id).unwrap_or_default(),
                )
            })
            .collect()
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, text, name, avatar, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => {
                let likes = self.load_likes(id).await?;
                let comments = self.load_comments(id).await?;
                Ok(Some(Self::row_to_post(&row, likes, comments)?))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn add_like(&self, id: &PostId, user: &UserId) -> Result<Vec<Like>, PostError> {
        sqlx::query(
            r#"
            INSERT INTO post_likes (post_id, user_id, liked_at)
            VALUES ($1, $2, NOW())
            "#,
        )
        .bind(id.as_uuid())
        .bind(user.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // Concurrent double-like loses to the primary key.
                if db_err.is_unique_violation() {
                    return PostError::AlreadyLiked;
                }
            }
            PostError::DatabaseError(e.to_string())
        })?;

        self.load_likes(id).await
    }

    async fn remove_like(&self, id: &PostId, user: &UserId) -> Result<Vec<Like>, PostError> {
        let result = sqlx::query(
            r#"
            DELETE FROM post_likes
            WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(user.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotYetLiked);
        }

        self.load_likes(id).await
    }

    async fn add_comment(&self, id: &PostId, comment: Comment) -> Result<Vec<Comment>, PostError> {
        sqlx::query(
            r#"
            INSERT INTO post_comments (id, post_id, user_id, text, name, avatar, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.id.0)
        .bind(id.as_uuid())
        .bind(comment.author.as_uuid())
        .bind(comment.text.as_str())
        .bind(&comment.author_name)
        .bind(comment.author_avatar.as_deref())
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        self.load_comments(id).await
    }
}
