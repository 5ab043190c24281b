use actix_web::{delete, get, post, web};

use crate::{
    api::{error, success},
    modules::notification::{
        model::{CreateMessageModel, CreateNotificationModel, CreatedNotification},
        schema::{NotificationEntity, NotificationMessageEntity},
        service::NotificationService,
    },
    utils::ValidatedJson,
};

#[post("/notification-messages")]
pub async fn send_message(
    notification_service: web::Data<NotificationService>,
    body: ValidatedJson<CreateMessageModel>,
) -> Result<success::Success<NotificationMessageEntity>, error::Error> {
    let message = notification_service.send_message(body.0).await?;
    Ok(success::Success::created(Some(message)).message("Message sent successfully"))
}

#[get("/users/{username}/notification-messages")]
pub async fn list_messages(
    notification_service: web::Data<NotificationService>,
    username: web::Path<String>,
) -> Result<success::Success<Vec<NotificationMessageEntity>>, error::Error> {
    let messages = notification_service.list_messages(&username).await?;
    Ok(success::Success::ok(Some(messages)))
}

#[delete("/notification-messages/{username}/{sent_at}")]
pub async fn delete_message(
    notification_service: web::Data<NotificationService>,
    path: web::Path<(String, String)>,
) -> Result<success::Success<()>, error::Error> {
    let (username, sent_at) = path.into_inner();
    notification_service.delete_message(&username, &sent_at).await?;
    Ok(success::Success::ok(None).message("Message deleted successfully"))
}

#[post("/notifications")]
pub async fn create_notification(
    notification_service: web::Data<NotificationService>,
    body: ValidatedJson<CreateNotificationModel>,
) -> Result<success::Success<CreatedNotification>, error::Error> {
    let notification_id = notification_service.notify(&body.0.username).await?;
    Ok(success::Success::created(Some(CreatedNotification { notification_id }))
        .message("Notification created successfully"))
}

#[get("/users/{username}/notifications")]
pub async fn list_notifications(
    notification_service: web::Data<NotificationService>,
    username: web::Path<String>,
) -> Result<success::Success<Vec<NotificationEntity>>, error::Error> {
    let notifications = notification_service.list_notifications(&username).await?;
    Ok(success::Success::ok(Some(notifications)))
}

#[delete("/notifications/{notification_id}")]
pub async fn delete_notification(
    notification_service: web::Data<NotificationService>,
    notification_id: web::Path<String>,
) -> Result<success::Success<()>, error::Error> {
    notification_service.delete_notification(&notification_id).await?;
    Ok(success::Success::ok(None).message("Notification deleted successfully"))
}
