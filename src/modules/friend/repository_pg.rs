use crate::{
    api::error,
    configs::Database,
    modules::{
        friend::{model::canonical_pair, repository::FriendRepository, schema::FriendEntity},
        user::schema::UserEntity,
    },
};

#[derive(Clone)]
pub struct FriendRepositoryPg {
    db: Database,
}

impl FriendRepositoryPg {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl FriendRepository for FriendRepositoryPg {
    async fn find_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError> {
        let (user_1, user_2) = canonical_pair(username_a, username_b);

        let mut conn = self.db.connection().await?;
        let friendship = sqlx::query_as::<_, FriendEntity>(
            "SELECT username1, username2, created_at FROM friends WHERE username1 = $1 AND username2 = $2",
        )
        .bind(user_1)
        .bind(user_2)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(friendship)
    }

    async fn find_friends(&self, username: &str) -> Result<Vec<UserEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let friends = sqlx::query_as::<_, UserEntity>(
            r#"
        SELECT
            u.username,
            u.profile_picture,
            u.email,
            u.full_name,
            u.default_privacy_level
        FROM friends f
        JOIN users u
            ON u.username = CASE
                WHEN f.username1 = $1 THEN f.username2
                ELSE f.username1
            END
        WHERE f.username1 = $1
           OR f.username2 = $1
        ORDER BY u.username
        "#,
        )
        .bind(username)
        .fetch_all(&mut *conn)
        .await?;

        Ok(friends)
    }

    async fn find_friends_with_everyone(&self) -> Result<Vec<UserEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        // no other user A exists without an edge between U and A
        let users = sqlx::query_as::<_, UserEntity>(
            r#"
        SELECT
            u.username,
            u.profile_picture,
            u.email,
            u.full_name,
            u.default_privacy_level
        FROM users u
        WHERE NOT EXISTS (
            SELECT 1
            FROM users a
            WHERE a.username <> u.username
              AND NOT EXISTS (
                  SELECT 1
                  FROM friends f
                  WHERE (f.username1 = u.username AND f.username2 = a.username)
                     OR (f.username1 = a.username AND f.username2 = u.username)
              )
        )
        ORDER BY u.username
        "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(users)
    }

    async fn create_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<bool, error::SystemError> {
        let (user_1, user_2) = canonical_pair(username_a, username_b);

        let mut conn = self.db.connection().await?;
        let rows = sqlx::query("INSERT INTO friends (username1, username2) VALUES ($1, $2)")
            .bind(user_1)
            .bind(user_2)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows > 0)
    }

    async fn delete_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<bool, error::SystemError> {
        let (user_1, user_2) = canonical_pair(username_a, username_b);

        let mut conn = self.db.connection().await?;
        let rows = sqlx::query("DELETE FROM friends WHERE username1 = $1 AND username2 = $2")
            .bind(user_1)
            .bind(user_2)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows > 0)
    }
}
