use std::sync::Arc;

use crate::{models::users::User, repositories::user_repo::UserRepository, Result};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_users(&self) -> Result<Vec<User>> {
        let users = self.repo.get_users().await?;

        Ok(users)
    }
}
