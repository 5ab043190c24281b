use actix_web::{delete, get, patch, post, web};

use crate::api::{error, success};
use crate::modules::user::{
    model,
    schema::{PublicUser, UserEntity},
    service::UserService,
};
use crate::utils::ValidatedJson;

#[post("/users")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    user_data: ValidatedJson<model::CreateUserModel>,
) -> Result<success::Success<()>, error::Error> {
    user_service.create(user_data.0).await?;
    Ok(success::Success::created(None).message("User created successfully"))
}

#[get("/users")]
pub async fn list_users(
    user_service: web::Data<UserService>,
) -> Result<success::Success<Vec<UserEntity>>, error::Error> {
    let users = user_service.list().await?;
    Ok(success::Success::ok(Some(users)))
}

#[get("/users/public")]
pub async fn list_public_users(
    user_service: web::Data<UserService>,
) -> Result<success::Success<Vec<PublicUser>>, error::Error> {
    let users = user_service.list_public().await?;
    Ok(success::Success::ok(Some(users)))
}

#[get("/users/{username}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<success::Success<UserEntity>, error::Error> {
    let user = user_service.get_by_username(&username).await?;
    Ok(success::Success::ok(Some(user)))
}

#[patch("/users/{username}")]
pub async fn update_user(
    user_service: web::Data<UserService>,
    username: web::Path<String>,
    user_data: ValidatedJson<model::UpdateUserModel>,
) -> Result<success::Success<()>, error::Error> {
    user_service.update(&username, user_data.0).await?;
    Ok(success::Success::ok(None).message("User updated successfully"))
}

#[delete("/users/{username}")]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<success::Success<()>, error::Error> {
    user_service.delete(&username).await?;
    Ok(success::Success::ok(None).message("User deleted successfully"))
}
