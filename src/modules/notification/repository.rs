use chrono::{DateTime, Utc};

use crate::api::error;
use crate::modules::notification::schema::{NotificationEntity, NotificationMessageEntity};

#[async_trait::async_trait]
pub trait NotificationRepository {
    async fn find_messages(
        &self,
        username: &str,
    ) -> Result<Vec<NotificationMessageEntity>, error::SystemError>;

    /// Stamps the message with the current server time.
    async fn create_message(
        &self,
        username: &str,
        message_text: &str,
    ) -> Result<NotificationMessageEntity, error::SystemError>;

    async fn delete_message(
        &self,
        username: &str,
        sent_at: DateTime<Utc>,
    ) -> Result<bool, error::SystemError>;

    async fn find_notifications(
        &self,
        username: &str,
    ) -> Result<Vec<NotificationEntity>, error::SystemError>;

    /// Copies the timestamp of the user's latest message. `None` when the
    /// user has no message yet.
    async fn create_notification(&self, username: &str)
    -> Result<Option<i32>, error::SystemError>;

    async fn delete_notification(&self, notification_id: i32) -> Result<bool, error::SystemError>;
}
