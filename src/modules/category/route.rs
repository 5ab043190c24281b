use crate::modules::category::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/categories")
            .service(create_category)
            .service(list_categories)
            .service(delete_category)
            .service(list_category_recipes)
            .service(add_category_recipe)
            .service(remove_category_recipe),
    );
}
