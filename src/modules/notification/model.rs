use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMessageModel {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "Message text cannot be empty"))]
    pub message_text: String,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNotificationModel {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
}

#[derive(Serialize)]
pub struct CreatedNotification {
    #[serde(rename = "NotificationID")]
    pub notification_id: i32,
}

/// Parses the `DateAndTimeSent` half of a message key.
pub fn parse_sent_at(raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(raw).ok().map(|t| t.with_timezone(&chrono::Utc))
}
