use crate::modules::friend::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/friends")
            .service(add_friend)
            .service(list_friends_with_everyone)
            .service(list_friends)
            .service(are_they_friends)
            .service(remove_friend),
    );
}
