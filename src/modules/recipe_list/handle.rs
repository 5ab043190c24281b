use actix_web::{delete, get, patch, post, web};

use crate::{
    api::{error, success},
    modules::{
        category::model::RecipeRefModel,
        recipe::schema::RecipeEntity,
        recipe_list::{
            model::{CreateRecipeListModel, CreatedRecipeList, UpdateRecipeListModel},
            schema::RecipeListEntity,
            service::RecipeListService,
        },
    },
    utils::ValidatedJson,
};

#[post("")]
pub async fn create_recipe_list(
    list_service: web::Data<RecipeListService>,
    body: ValidatedJson<CreateRecipeListModel>,
) -> Result<success::Success<CreatedRecipeList>, error::Error> {
    let recipe_list_id = list_service.create(body.0).await?;
    Ok(success::Success::created(Some(CreatedRecipeList { recipe_list_id }))
        .message("Recipe list created successfully"))
}

#[get("/users/{username}/recipe-lists")]
pub async fn list_user_recipe_lists(
    list_service: web::Data<RecipeListService>,
    username: web::Path<String>,
) -> Result<success::Success<Vec<RecipeListEntity>>, error::Error> {
    let lists = list_service.list_by_owner(&username).await?;
    Ok(success::Success::ok(Some(lists)))
}

#[patch("/{list_id}")]
pub async fn update_recipe_list(
    list_service: web::Data<RecipeListService>,
    list_id: web::Path<String>,
    body: ValidatedJson<UpdateRecipeListModel>,
) -> Result<success::Success<()>, error::Error> {
    list_service.update(&list_id, body.0).await?;
    Ok(success::Success::ok(None).message("Recipe list updated successfully"))
}

#[delete("/{list_id}")]
pub async fn delete_recipe_list(
    list_service: web::Data<RecipeListService>,
    list_id: web::Path<String>,
) -> Result<success::Success<()>, error::Error> {
    list_service.delete(&list_id).await?;
    Ok(success::Success::ok(None).message("Recipe list deleted successfully"))
}

#[get("/{list_id}/recipes")]
pub async fn list_recipe_list_entries(
    list_service: web::Data<RecipeListService>,
    list_id: web::Path<String>,
) -> Result<success::Success<Vec<RecipeEntity>>, error::Error> {
    let recipes = list_service.list_recipes(&list_id).await?;
    Ok(success::Success::ok(Some(recipes)))
}

#[post("/{list_id}/recipes")]
pub async fn add_recipe_list_entry(
    list_service: web::Data<RecipeListService>,
    list_id: web::Path<String>,
    body: ValidatedJson<RecipeRefModel>,
) -> Result<success::Success<()>, error::Error> {
    list_service.add_recipe(&list_id, body.0.recipe_id).await?;
    Ok(success::Success::created(None).message("Recipe added to list"))
}

#[delete("/{list_id}/recipes/{recipe_id}")]
pub async fn remove_recipe_list_entry(
    list_service: web::Data<RecipeListService>,
    path: web::Path<(String, String)>,
) -> Result<success::Success<()>, error::Error> {
    let (list_id, recipe_id) = path.into_inner();
    list_service.remove_recipe(&list_id, &recipe_id).await?;
    Ok(success::Success::ok(None).message("Recipe removed from list"))
}
