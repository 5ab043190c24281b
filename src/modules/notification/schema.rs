use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationMessageEntity {
    pub username: String,
    pub date_and_time_sent: chrono::DateTime<chrono::Utc>,
    pub message_text: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationEntity {
    #[serde(rename = "NotificationID")]
    pub notification_id: i32,
    pub username: String,
    pub date_and_time_sent: chrono::DateTime<chrono::Utc>,
}
