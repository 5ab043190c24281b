use crate::modules::recipe_list::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/recipe-lists")
            .service(create_recipe_list)
            .service(update_recipe_list)
            .service(delete_recipe_list)
            .service(list_recipe_list_entries)
            .service(add_recipe_list_entry)
            .service(remove_recipe_list_entry),
    )
    .service(list_user_recipe_lists);
}
