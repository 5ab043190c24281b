use crate::{
    api::error,
    modules::user::{
        model::{InsertUser, UpdateUser},
        schema::{PublicUser, UserEntity},
    },
};

#[async_trait::async_trait]
pub trait UserRepository {
    async fn exists(&self, username: &str) -> Result<bool, error::SystemError>;
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError>;
    async fn find_all(&self) -> Result<Vec<UserEntity>, error::SystemError>;
    /// Users whose default privacy level is public, without private columns.
    async fn find_public(&self) -> Result<Vec<PublicUser>, error::SystemError>;
    async fn create(&self, user: &InsertUser) -> Result<bool, error::SystemError>;
    async fn update(&self, username: &str, user: &UpdateUser) -> Result<bool, error::SystemError>;
    async fn delete(&self, username: &str) -> Result<bool, error::SystemError>;
}
