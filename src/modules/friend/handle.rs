use actix_web::{delete, get, post, web};

use crate::{
    api::{error, success},
    modules::{
        friend::{
            model::{FriendPairBody, FriendshipStatus},
            service::FriendService,
        },
        user::schema::UserEntity,
    },
    utils::ValidatedJson,
};

#[post("")]
pub async fn add_friend(
    friend_service: web::Data<FriendService>,
    body: ValidatedJson<FriendPairBody>,
) -> Result<success::Success<()>, error::Error> {
    friend_service.add_friend(&body.0.username1, &body.0.username2).await?;
    Ok(success::Success::created(None).message("Friend added successfully"))
}

#[get("/with-everyone")]
pub async fn list_friends_with_everyone(
    friend_service: web::Data<FriendService>,
) -> Result<success::Success<Vec<UserEntity>>, error::Error> {
    let users = friend_service.friends_with_everyone().await?;
    Ok(success::Success::ok(Some(users)))
}

#[get("/{username}")]
pub async fn list_friends(
    friend_service: web::Data<FriendService>,
    username: web::Path<String>,
) -> Result<success::Success<Vec<UserEntity>>, error::Error> {
    let friends = friend_service.get_friends(&username).await?;
    Ok(success::Success::ok(Some(friends)).message("Friends retrieved successfully"))
}

#[get("/{username_a}/{username_b}")]
pub async fn are_they_friends(
    friend_service: web::Data<FriendService>,
    path: web::Path<(String, String)>,
) -> Result<success::Success<FriendshipStatus>, error::Error> {
    let (a, b) = path.into_inner();
    let are_friends = friend_service.are_friends(&a, &b).await?;
    Ok(success::Success::ok(Some(FriendshipStatus { are_friends })))
}

#[delete("/{username_a}/{username_b}")]
pub async fn remove_friend(
    friend_service: web::Data<FriendService>,
    path: web::Path<(String, String)>,
) -> Result<success::Success<()>, error::Error> {
    let (a, b) = path.into_inner();
    friend_service.remove_friend(&a, &b).await?;
    Ok(success::Success::ok(None).message("Friend removed successfully"))
}
