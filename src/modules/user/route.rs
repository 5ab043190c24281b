use crate::modules::user::handle::*;
use actix_web::web::ServiceConfig;

// `/users/public` must be registered ahead of `/users/{username}`.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(create_user)
        .service(list_users)
        .service(list_public_users)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}
