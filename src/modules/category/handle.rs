use actix_web::{delete, get, post, web};

use crate::{
    api::{error, success},
    modules::{
        category::{
            model::{CreateCategoryModel, RecipeRefModel},
            schema::CategoryEntity,
            service::CategoryService,
        },
        recipe::schema::RecipeEntity,
    },
    utils::ValidatedJson,
};

#[post("")]
pub async fn create_category(
    category_service: web::Data<CategoryService>,
    body: ValidatedJson<CreateCategoryModel>,
) -> Result<success::Success<()>, error::Error> {
    category_service.create(&body.0.category_name).await?;
    Ok(success::Success::created(None).message("Category created successfully"))
}

#[get("")]
pub async fn list_categories(
    category_service: web::Data<CategoryService>,
) -> Result<success::Success<Vec<CategoryEntity>>, error::Error> {
    let categories = category_service.list().await?;
    Ok(success::Success::ok(Some(categories)))
}

#[delete("/{category_name}")]
pub async fn delete_category(
    category_service: web::Data<CategoryService>,
    category_name: web::Path<String>,
) -> Result<success::Success<()>, error::Error> {
    category_service.delete(&category_name).await?;
    Ok(success::Success::ok(None).message("Category deleted successfully"))
}

#[get("/{category_name}/recipes")]
pub async fn list_category_recipes(
    category_service: web::Data<CategoryService>,
    category_name: web::Path<String>,
) -> Result<success::Success<Vec<RecipeEntity>>, error::Error> {
    let recipes = category_service.list_recipes(&category_name).await?;
    Ok(success::Success::ok(Some(recipes)))
}

#[post("/{category_name}/recipes")]
pub async fn add_category_recipe(
    category_service: web::Data<CategoryService>,
    category_name: web::Path<String>,
    body: ValidatedJson<RecipeRefModel>,
) -> Result<success::Success<()>, error::Error> {
    category_service.add_recipe(&category_name, body.0.recipe_id).await?;
    Ok(success::Success::created(None).message("Recipe added to category"))
}

#[delete("/{category_name}/recipes/{recipe_id}")]
pub async fn remove_category_recipe(
    category_service: web::Data<CategoryService>,
    path: web::Path<(String, String)>,
) -> Result<success::Success<()>, error::Error> {
    let (category_name, recipe_id) = path.into_inner();
    category_service.remove_recipe(&category_name, &recipe_id).await?;
    Ok(success::Success::ok(None).message("Recipe removed from category"))
}
