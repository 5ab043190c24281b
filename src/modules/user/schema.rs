use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Type, Serialize, Deserialize)]
#[sqlx(type_name = "privacy_level")]
pub enum PrivacyLevel {
    Public,
    #[default]
    Private,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserEntity {
    pub username: String,
    pub profile_picture: Option<String>,
    pub email: String,
    pub full_name: String,
    pub default_privacy_level: PrivacyLevel,
}

/// Projection exposed by the public listing.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublicUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl From<UserEntity> for PublicUser {
    fn from(user: UserEntity) -> Self {
        PublicUser { username: user.username, email: user.email, full_name: user.full_name }
    }
}
