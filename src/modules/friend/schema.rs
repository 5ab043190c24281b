use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct FriendEntity {
    pub username1: String,
    pub username2: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
