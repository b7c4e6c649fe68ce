use std::sync::Arc;

use crate::{
    models::posts::{CreatePostDto, UpdatePostDto, UserPost},
    repositories::posts_repo::UserPostsRepository,
    Error, Result,
};

#[derive(Clone)]
pub struct UserPostsService {
    repo: Arc<dyn UserPostsRepository>,
}

impl UserPostsService {
    pub fn new(repo: Arc<dyn UserPostsRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all_posts(&self) -> Result<Vec<UserPost>> {
        let posts = self.repo.get_posts().await?;

        Ok(posts)
    }

    pub async fn find_by_id(&self, post_id: i32) -> Result<UserPost> {
        let post = self.repo.get_post(post_id).await?;

        post.ok_or(Error::NotFound)
    }

    pub async fn save(&self, new_post: &CreatePostDto) -> Result<UserPost> {
        let post = self.repo.create_post(new_post).await?;

        Ok(post)
    }

    pub async fn update_post(&self, post_id: i32, update: &UpdatePostDto) -> Result<UserPost> {
        let post = self
            .repo
            .update_post(
                post_id,
                update.author.as_deref(),
                update.content.as_deref(),
                update.date.as_deref(),
                update.likes,
                update.colour.as_deref(),
            )
            .await?;

        post.ok_or(Error::NotFound)
    }

    pub async fn delete_post(&self, post_id: i32) -> Result<()> {
        self.repo.delete_post(post_id).await?;

        Ok(())
    }
}
