use crate::{
    api::error,
    configs::Database,
    modules::user::{
        model::{InsertUser, UpdateUser},
        repository::UserRepository,
        schema::{PublicUser, UserEntity},
    },
    utils::SparseUpdate,
};

#[derive(Clone)]
pub struct UserRepositoryPg {
    db: Database,
}

impl UserRepositoryPg {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryPg {
    async fn exists(&self, username: &str) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(&mut *conn)
            .await?;
        Ok(count > 0)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let user = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT username, profile_picture, email, full_name, default_privacy_level
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<UserEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let users = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT username, profile_picture, email, full_name, default_privacy_level
            FROM users
            ORDER BY username
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(users)
    }

    async fn find_public(&self) -> Result<Vec<PublicUser>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let users = sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT username, email, full_name
            FROM users
            WHERE default_privacy_level = 'Public'
            ORDER BY username
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(users)
    }

    async fn create(&self, user: &InsertUser) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query(
            r#"
            INSERT INTO users (username, profile_picture, email, full_name, default_privacy_level)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&user.username)
        .bind(&user.profile_picture)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(user.default_privacy_level)
        .execute(&mut *conn)
        .await?
        .rows_affected();
        Ok(rows > 0)
    }

    async fn update(&self, username: &str, user: &UpdateUser) -> Result<bool, error::SystemError> {
        let mut query = SparseUpdate::new("users")
            .set("profile_picture", user.profile_picture.as_ref().map(|p| p.as_deref()))
            .set("email", user.email.as_deref())
            .set("full_name", user.full_name.as_deref())
            .set("default_privacy_level", user.default_privacy_level)
            .finish("username", username)?;

        let mut conn = self.db.connection().await?;
        let rows = query.build().execute(&mut *conn).await?.rows_affected();
        Ok(rows > 0)
    }

    async fn delete(&self, username: &str) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }
}
