use log::info;
use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        notification::{
            model::{parse_sent_at, CreateMessageModel},
            repository::NotificationRepository,
            schema::{NotificationEntity, NotificationMessageEntity},
        },
        user::repository::UserRepository,
    },
    utils::parse_id,
};

#[derive(Clone)]
pub struct NotificationService {
    notification_repo: Arc<dyn NotificationRepository + Send + Sync>,
    user_repo: Arc<dyn UserRepository + Send + Sync>,
}

impl NotificationService {
    pub fn with_dependencies(
        notification_repo: Arc<dyn NotificationRepository + Send + Sync>,
        user_repo: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        NotificationService { notification_repo, user_repo }
    }

    async fn require_user(&self, username: &str) -> Result<(), error::SystemError> {
        if !self.user_repo.exists(username).await? {
            return Err(error::SystemError::not_found("User not found"));
        }
        Ok(())
    }

    pub async fn list_messages(
        &self,
        username: &str,
    ) -> Result<Vec<NotificationMessageEntity>, error::SystemError> {
        self.notification_repo.find_messages(username).await
    }

    pub async fn send_message(
        &self,
        message: CreateMessageModel,
    ) -> Result<NotificationMessageEntity, error::SystemError> {
        self.require_user(&message.username).await?;
        let message =
            self.notification_repo.create_message(&message.username, &message.message_text).await?;
        info!("Notification message stored for {}", message.username);
        Ok(message)
    }

    pub async fn delete_message(
        &self,
        username: &str,
        raw_sent_at: &str,
    ) -> Result<(), error::SystemError> {
        let sent_at = parse_sent_at(raw_sent_at)
            .ok_or_else(|| error::SystemError::bad_request("DateAndTimeSent must be RFC 3339"))?;
        if !self.notification_repo.delete_message(username, sent_at).await? {
            return Err(error::SystemError::not_found("Notification message not found"));
        }
        Ok(())
    }

    pub async fn list_notifications(
        &self,
        username: &str,
    ) -> Result<Vec<NotificationEntity>, error::SystemError> {
        self.notification_repo.find_notifications(username).await
    }

    pub async fn notify(&self, username: &str) -> Result<i32, error::SystemError> {
        self.require_user(username).await?;
        self.notification_repo
            .create_notification(username)
            .await?
            .ok_or_else(|| error::SystemError::not_found("User has no notification message"))
    }

    pub async fn delete_notification(&self, raw_id: &str) -> Result<(), error::SystemError> {
        let id =
            parse_id(raw_id).ok_or_else(|| error::SystemError::not_found("Notification not found"))?;
        if !self.notification_repo.delete_notification(id).await? {
            return Err(error::SystemError::not_found("Notification not found"));
        }
        Ok(())
    }
}
