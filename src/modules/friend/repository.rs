use crate::api::error;
use crate::modules::friend::schema::FriendEntity;
use crate::modules::user::schema::UserEntity;

#[async_trait::async_trait]
pub trait FriendRepository {
    async fn find_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError>;

    async fn find_friends(&self, username: &str) -> Result<Vec<UserEntity>, error::SystemError>;

    /// Users with an edge to every other user.
    async fn find_friends_with_everyone(&self) -> Result<Vec<UserEntity>, error::SystemError>;

    async fn create_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<bool, error::SystemError>;

    async fn delete_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<bool, error::SystemError>;
}
