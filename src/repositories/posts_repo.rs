use async_trait::async_trait;
use tracing::debug;

use crate::{
    models::posts::{CreatePostDto, UserPost},
    Result,
};

use super::PostgresRepo;

/// Narrow read capability the filter and sorter engines consume.
///
/// Always yields a (possibly empty) snapshot; "no posts" and "no data" are
/// both the empty vector, so callers never special-case an absent collection.
#[async_trait]
pub trait PostsSource: Send + Sync {
    async fn get_posts(&self) -> Result<Vec<UserPost>>;
}

#[async_trait]
pub trait UserPostsRepository: PostsSource {
    async fn get_post(&self, post_id: i32) -> Result<Option<UserPost>>;
    async fn create_post(&self, new_post: &CreatePostDto) -> Result<UserPost>;
    async fn update_post(
        &self,
        post_id: i32,
        author: Option<&str>,
        content: Option<&str>,
        date: Option<&str>,
        likes: Option<i32>,
        colour: Option<&str>,
    ) -> Result<Option<UserPost>>;
    async fn delete_post(&self, post_id: i32) -> Result<()>;
}

#[async_trait]
impl PostsSource for PostgresRepo {
    async fn get_posts(&self) -> Result<Vec<UserPost>> {
        let posts = sqlx::query_as::<_, UserPost>(
            r#"
            SELECT id, author, content, date, likes, colour FROM posts ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = posts.len(), "Fetched posts snapshot");

        Ok(posts)
    }
}

#[async_trait]
impl UserPostsRepository for PostgresRepo {
    async fn get_post(&self, post_id: i32) -> Result<Option<UserPost>> {
        let post = sqlx::query_as::<_, UserPost>(
            r#"
            SELECT id, author, content, date, likes, colour FROM posts WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn create_post(&self, new_post: &CreatePostDto) -> Result<UserPost> {
        let post = sqlx::query_as::<_, UserPost>(
            r#"
            INSERT INTO posts (author, content, date, likes, colour)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, author, content, date, likes, colour
            "#,
        )
        .bind(&new_post.author)
        .bind(&new_post.content)
        .bind(&new_post.date)
        .bind(new_post.likes)
        .bind(new_post.colour.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn update_post(
        &self,
        post_id: i32,
        author: Option<&str>,
        content: Option<&str>,
        date: Option<&str>,
        likes: Option<i32>,
        colour: Option<&str>,
    ) -> Result<Option<UserPost>> {
        let post = sqlx::query_as::<_, UserPost>(
            r#"
            UPDATE posts
            SET author = COALESCE($2, author),
                content = COALESCE($3, content),
                date = COALESCE($4, date),
                likes = COALESCE($5, likes),
                colour = COALESCE($6, colour)
            WHERE id = $1
            RETURNING id, author, content, date, likes, colour
            "#,
        )
        .bind(post_id)
        .bind(author)
        .bind(content)
        .bind(date)
        .bind(likes)
        .bind(colour)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn delete_post(&self, post_id: i32) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM posts WHERE id = $1
            "#,
        )
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
