use serde::Deserialize;
use validator::Validate;

use crate::modules::user::schema::PrivacyLevel;
use crate::utils::double_option;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserModel {
    #[validate(length(min = 1, max = 64, message = "Username must be 1 to 64 characters long"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    pub full_name: String,
    pub profile_picture: Option<String>,
    pub default_privacy_level: Option<PrivacyLevel>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserModel {
    #[serde(default, deserialize_with = "double_option")]
    pub profile_picture: Option<Option<String>>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    pub full_name: Option<String>,
    pub default_privacy_level: Option<PrivacyLevel>,
}

pub struct InsertUser {
    pub username: String,
    pub profile_picture: Option<String>,
    pub email: String,
    pub full_name: String,
    pub default_privacy_level: PrivacyLevel,
}

#[derive(Default)]
pub struct UpdateUser {
    pub profile_picture: Option<Option<String>>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub default_privacy_level: Option<PrivacyLevel>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.profile_picture.is_none()
            && self.email.is_none()
            && self.full_name.is_none()
            && self.default_privacy_level.is_none()
    }
}
