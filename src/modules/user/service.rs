use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::user::{
    model::{CreateUserModel, InsertUser, UpdateUser, UpdateUserModel},
    repository::UserRepository,
    schema::{PublicUser, UserEntity},
};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo }
    }

    pub async fn get_by_username(&self, username: &str) -> Result<UserEntity, error::SystemError> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| error::SystemError::not_found("User not found"))
    }

    pub async fn list(&self) -> Result<Vec<UserEntity>, error::SystemError> {
        self.repo.find_all().await
    }

    pub async fn list_public(&self) -> Result<Vec<PublicUser>, error::SystemError> {
        self.repo.find_public().await
    }

    pub async fn create(&self, user: CreateUserModel) -> Result<(), error::SystemError> {
        let new_user = InsertUser {
            username: user.username.trim().to_string(),
            profile_picture: user.profile_picture,
            email: user.email,
            full_name: user.full_name,
            default_privacy_level: user.default_privacy_level.unwrap_or_default(),
        };

        if new_user.username.is_empty() {
            return Err(error::SystemError::bad_request("Username cannot be empty"));
        }

        if !self.repo.create(&new_user).await? {
            return Err(error::SystemError::DatabaseError("User was not inserted".into()));
        }
        info!("User {} created", new_user.username);
        Ok(())
    }

    pub async fn update(
        &self,
        username: &str,
        user: UpdateUserModel,
    ) -> Result<(), error::SystemError> {
        let update_user = UpdateUser {
            profile_picture: user.profile_picture,
            email: user.email,
            full_name: user.full_name,
            default_privacy_level: user.default_privacy_level,
        };

        if update_user.is_empty() {
            return Err(error::SystemError::bad_request("No fields to update"));
        }

        if !self.repo.update(username, &update_user).await? {
            return Err(error::SystemError::not_found("User not found"));
        }
        Ok(())
    }

    pub async fn delete(&self, username: &str) -> Result<(), error::SystemError> {
        if !self.repo.delete(username).await? {
            return Err(error::SystemError::not_found("User not found"));
        }
        info!("User {} deleted", username);
        Ok(())
    }
}
