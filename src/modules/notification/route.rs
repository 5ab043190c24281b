use crate::modules::notification::handle::*;
use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(send_message)
        .service(list_messages)
        .service(delete_message)
        .service(create_notification)
        .service(list_notifications)
        .service(delete_notification);
}
