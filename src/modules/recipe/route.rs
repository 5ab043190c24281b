use crate::modules::recipe::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/recipes")
            .service(create_recipe)
            .service(list_public_recipes)
            .service(get_recipe)
            .service(update_recipe)
            .service(delete_recipe)
            .service(add_ingredient)
            .service(list_ingredients)
            .service(add_step)
            .service(list_steps)
            .service(update_step)
            .service(delete_step),
    )
    .service(scope("/ingredients").service(update_ingredient).service(delete_ingredient))
    .service(list_user_recipes);
}
