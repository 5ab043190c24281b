use chrono::{DateTime, Utc};

use crate::{
    api::error,
    configs::Database,
    modules::notification::{
        repository::NotificationRepository,
        schema::{NotificationEntity, NotificationMessageEntity},
    },
};

#[derive(Clone)]
pub struct NotificationRepositoryPg {
    db: Database,
}

impl NotificationRepositoryPg {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl NotificationRepository for NotificationRepositoryPg {
    async fn find_messages(
        &self,
        username: &str,
    ) -> Result<Vec<NotificationMessageEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let messages = sqlx::query_as::<_, NotificationMessageEntity>(
            r#"
            SELECT username, date_and_time_sent, message_text
            FROM notification_messages
            WHERE username = $1
            ORDER BY date_and_time_sent DESC
            "#,
        )
        .bind(username)
        .fetch_all(&mut *conn)
        .await?;
        Ok(messages)
    }

    async fn create_message(
        &self,
        username: &str,
        message_text: &str,
    ) -> Result<NotificationMessageEntity, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let message = sqlx::query_as::<_, NotificationMessageEntity>(
            r#"
            INSERT INTO notification_messages (username, date_and_time_sent, message_text)
            VALUES ($1, NOW(), $2)
            RETURNING username, date_and_time_sent, message_text
            "#,
        )
        .bind(username)
        .bind(message_text)
        .fetch_one(&mut *conn)
        .await?;
        Ok(message)
    }

    async fn delete_message(
        &self,
        username: &str,
        sent_at: DateTime<Utc>,
    ) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query(
            "DELETE FROM notification_messages WHERE username = $1 AND date_and_time_sent = $2",
        )
        .bind(username)
        .bind(sent_at)
        .execute(&mut *conn)
        .await?
        .rows_affected();
        Ok(rows > 0)
    }

    async fn find_notifications(
        &self,
        username: &str,
    ) -> Result<Vec<NotificationEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let notifications = sqlx::query_as::<_, NotificationEntity>(
            r#"
            SELECT notification_id, username, date_and_time_sent
            FROM notifications
            WHERE username = $1
            ORDER BY date_and_time_sent DESC, notification_id DESC
            "#,
        )
        .bind(username)
        .fetch_all(&mut *conn)
        .await?;
        Ok(notifications)
    }

    async fn create_notification(
        &self,
        username: &str,
    ) -> Result<Option<i32>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let notification_id: Option<i32> = sqlx::query_scalar(
            r#"
            INSERT INTO notifications (username, date_and_time_sent)
            SELECT username, MAX(date_and_time_sent)
            FROM notification_messages
            WHERE username = $1
            GROUP BY username
            RETURNING notification_id
            "#,
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(notification_id)
    }

    async fn delete_notification(&self, notification_id: i32) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query("DELETE FROM notifications WHERE notification_id = $1")
            .bind(notification_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }
}
