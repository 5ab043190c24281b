use log::info;
use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        friend::repository::FriendRepository,
        user::{repository::UserRepository, schema::UserEntity},
    },
};

#[derive(Clone)]
pub struct FriendService {
    friend_repo: Arc<dyn FriendRepository + Send + Sync>,
    user_repo: Arc<dyn UserRepository + Send + Sync>,
}

fn distinct_pair<'a>(
    username_a: &'a str,
    username_b: &'a str,
) -> Result<(&'a str, &'a str), error::SystemError> {
    let (a, b) = (username_a.trim(), username_b.trim());
    if a.is_empty() || b.is_empty() {
        return Err(error::SystemError::bad_request("Both usernames are required"));
    }
    if a == b {
        return Err(error::SystemError::bad_request("A user cannot be friends with themselves"));
    }
    Ok((a, b))
}

impl FriendService {
    pub fn with_dependencies(
        friend_repo: Arc<dyn FriendRepository + Send + Sync>,
        user_repo: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        FriendService { friend_repo, user_repo }
    }

    pub async fn are_friends(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<bool, error::SystemError> {
        let (a, b) = distinct_pair(username_a, username_b)?;
        let friendship = self.friend_repo.find_friendship(a, b).await?;
        Ok(friendship.is_some())
    }

    pub async fn get_friends(&self, username: &str) -> Result<Vec<UserEntity>, error::SystemError> {
        self.friend_repo.find_friends(username).await
    }

    pub async fn friends_with_everyone(&self) -> Result<Vec<UserEntity>, error::SystemError> {
        self.friend_repo.find_friends_with_everyone().await
    }

    pub async fn add_friend(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<(), error::SystemError> {
        let (a, b) = distinct_pair(username_a, username_b)?;

        let (a_exists, b_exists) =
            tokio::try_join!(self.user_repo.exists(a), self.user_repo.exists(b))?;
        if !a_exists || !b_exists {
            return Err(error::SystemError::not_found("User not found"));
        }

        if !self.friend_repo.create_friendship(a, b).await? {
            return Err(error::SystemError::DatabaseError("Friendship was not inserted".into()));
        }
        info!("{a} and {b} are now friends");
        Ok(())
    }

    pub async fn remove_friend(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<(), error::SystemError> {
        let (a, b) = distinct_pair(username_a, username_b)?;
        if !self.friend_repo.delete_friendship(a, b).await? {
            return Err(error::SystemError::not_found("Friendship not found"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::MemoryStore;

    fn service_with_users(names: &[&str]) -> (Arc<MemoryStore>, FriendService) {
        let store = Arc::new(MemoryStore::default());
        for name in names {
            store.seed_user(name);
        }
        let service = FriendService::with_dependencies(store.clone(), store.clone());
        (store, service)
    }

    fn usernames(users: Vec<UserEntity>) -> Vec<String> {
        users.into_iter().map(|u| u.username).collect()
    }

    #[actix_web::test]
    async fn friendship_is_symmetric() {
        let (_, service) = service_with_users(&["alice", "bob"]);

        service.add_friend("bob", "alice").await.unwrap();

        assert!(service.are_friends("alice", "bob").await.unwrap());
        assert!(service.are_friends("bob", "alice").await.unwrap());
        assert_eq!(usernames(service.get_friends("alice").await.unwrap()), vec!["bob"]);
    }

    #[actix_web::test]
    async fn delete_works_in_either_order() {
        let (_, service) = service_with_users(&["alice", "bob"]);

        service.add_friend("alice", "bob").await.unwrap();
        service.remove_friend("bob", "alice").await.unwrap();

        assert!(!service.are_friends("alice", "bob").await.unwrap());
        assert!(matches!(
            service.remove_friend("alice", "bob").await.unwrap_err(),
            error::SystemError::NotFound(_)
        ));
    }

    #[actix_web::test]
    async fn self_friending_is_rejected_before_storage() {
        let (store, service) = service_with_users(&["alice"]);

        let err = service.add_friend("alice", "alice").await.unwrap_err();
        assert!(matches!(err, error::SystemError::BadRequest(_)));
        assert_eq!(store.friendship_count(), 0);
    }

    #[actix_web::test]
    async fn duplicate_edge_conflicts_in_either_order() {
        let (_, service) = service_with_users(&["alice", "bob"]);

        service.add_friend("alice", "bob").await.unwrap();
        let err = service.add_friend("bob", "alice").await.unwrap_err();
        assert!(matches!(err, error::SystemError::Conflict(_)));
    }

    #[actix_web::test]
    async fn unknown_user_cannot_be_friended() {
        let (store, service) = service_with_users(&["alice"]);

        let err = service.add_friend("alice", "ghost").await.unwrap_err();
        assert!(matches!(err, error::SystemError::NotFound(_)));
        assert_eq!(store.friendship_count(), 0);
    }

    #[actix_web::test]
    async fn friends_with_everyone_follows_the_graph() {
        let (_, service) = service_with_users(&["alice", "bob", "carol"]);
        service.add_friend("alice", "bob").await.unwrap();
        service.add_friend("bob", "carol").await.unwrap();
        service.add_friend("carol", "alice").await.unwrap();

        assert_eq!(
            usernames(service.friends_with_everyone().await.unwrap()),
            vec!["alice", "bob", "carol"]
        );

        service.remove_friend("alice", "carol").await.unwrap();
        assert_eq!(usernames(service.friends_with_everyone().await.unwrap()), vec!["bob"]);
    }
}
