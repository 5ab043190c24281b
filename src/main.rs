use actix_cors::Cors;
use actix_web::{self, App, HttpServer, http::header, middleware::Logger, web};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::Database,
    modules::{
        category::{repository_pg::CategoryRepositoryPg, service::CategoryService},
        friend::{repository_pg::FriendRepositoryPg, service::FriendService},
        notification::{repository_pg::NotificationRepositoryPg, service::NotificationService},
        recipe::{repository::RecipeRepo, repository_pg::RecipeRepositoryPg, service::RecipeService},
        recipe_list::{repository_pg::RecipeListRepositoryPg, service::RecipeListService},
        user::{repository::UserRepository, repository_pg::UserRepositoryPg, service::UserService},
    },
};

mod api;
mod configs;
mod constants;
mod modules;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db = Database::connect().await;

    if db.is_degraded() {
        log::warn!("Skipping migrations, the database is unreachable");
    } else {
        db.migrate().await.map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    let user_repo: Arc<dyn UserRepository + Send + Sync> =
        Arc::new(UserRepositoryPg::new(db.clone()));
    let recipe_repo: Arc<dyn RecipeRepo> = Arc::new(RecipeRepositoryPg::new(db.clone()));

    let user_service = UserService::with_dependencies(user_repo.clone());
    let friend_service = FriendService::with_dependencies(
        Arc::new(FriendRepositoryPg::new(db.clone())),
        user_repo.clone(),
    );
    let recipe_service = RecipeService::with_dependencies(recipe_repo.clone(), user_repo.clone());
    let category_service = CategoryService::with_dependencies(
        Arc::new(CategoryRepositoryPg::new(db.clone())),
        recipe_repo.clone(),
    );
    let recipe_list_service = RecipeListService::with_dependencies(
        Arc::new(RecipeListRepositoryPg::new(db.clone())),
        recipe_repo.clone(),
        user_repo.clone(),
    );
    let notification_service = NotificationService::with_dependencies(
        Arc::new(NotificationRepositoryPg::new(db.clone())),
        user_repo.clone(),
    );

    log::info!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&ENV.frontend_url)
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(friend_service.clone()))
            .app_data(web::Data::new(recipe_service.clone()))
            .app_data(web::Data::new(category_service.clone()))
            .app_data(web::Data::new(recipe_list_service.clone()))
            .app_data(web::Data::new(notification_service.clone()))
            .service(health_check)
            .service(
                web::scope("/api")
                    .configure(modules::friend::route::configure)
                    .configure(modules::recipe::route::configure)
                    .configure(modules::category::route::configure)
                    .configure(modules::recipe_list::route::configure)
                    .configure(modules::notification::route::configure)
                    .configure(modules::user::route::configure),
            )
    })
    .shutdown_timeout(ENV.shutdown_grace_secs)
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await?;

    db.close().await;
    Ok(())
}
