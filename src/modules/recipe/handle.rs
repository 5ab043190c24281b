use actix_web::{delete, get, patch, post, web};

use crate::{
    api::{error, success},
    modules::recipe::{
        model::{
            CreateIngredientModel, CreateRecipeModel, CreateStepModel, CreatedIngredient,
            CreatedRecipe, UpdateIngredientModel, UpdateRecipeModel, UpdateStepModel,
        },
        schema::{RecipeEntity, RecipeIngredientEntity, RecipeStepEntity},
        service::RecipeService,
    },
    utils::ValidatedJson,
};

#[post("")]
pub async fn create_recipe(
    recipe_service: web::Data<RecipeService>,
    body: ValidatedJson<CreateRecipeModel>,
) -> Result<success::Success<CreatedRecipe>, error::Error> {
    let recipe_id = recipe_service.create(body.0).await?;
    Ok(success::Success::created(Some(CreatedRecipe { recipe_id }))
        .message("Recipe created successfully"))
}

#[get("")]
pub async fn list_public_recipes(
    recipe_service: web::Data<RecipeService>,
) -> Result<success::Success<Vec<RecipeEntity>>, error::Error> {
    let recipes = recipe_service.list_public().await?;
    Ok(success::Success::ok(Some(recipes)))
}

#[get("/{recipe_id}")]
pub async fn get_recipe(
    recipe_service: web::Data<RecipeService>,
    recipe_id: web::Path<String>,
) -> Result<success::Success<RecipeEntity>, error::Error> {
    let recipe = recipe_service.get(&recipe_id).await?;
    Ok(success::Success::ok(Some(recipe)))
}

#[patch("/{recipe_id}")]
pub async fn update_recipe(
    recipe_service: web::Data<RecipeService>,
    recipe_id: web::Path<String>,
    body: ValidatedJson<UpdateRecipeModel>,
) -> Result<success::Success<()>, error::Error> {
    recipe_service.update(&recipe_id, body.0).await?;
    Ok(success::Success::ok(None).message("Recipe updated successfully"))
}

#[delete("/{recipe_id}")]
pub async fn delete_recipe(
    recipe_service: web::Data<RecipeService>,
    recipe_id: web::Path<String>,
) -> Result<success::Success<()>, error::Error> {
    recipe_service.delete(&recipe_id).await?;
    Ok(success::Success::ok(None).message("Recipe deleted successfully"))
}

#[get("/users/{username}/recipes")]
pub async fn list_user_recipes(
    recipe_service: web::Data<RecipeService>,
    username: web::Path<String>,
) -> Result<success::Success<Vec<RecipeEntity>>, error::Error> {
    let recipes = recipe_service.list_by_owner(&username).await?;
    Ok(success::Success::ok(Some(recipes)))
}

#[post("/{recipe_id}/ingredients")]
pub async fn add_ingredient(
    recipe_service: web::Data<RecipeService>,
    recipe_id: web::Path<String>,
    body: ValidatedJson<CreateIngredientModel>,
) -> Result<success::Success<CreatedIngredient>, error::Error> {
    let recipe_ingredient_id = recipe_service.add_ingredient(&recipe_id, body.0).await?;
    Ok(success::Success::created(Some(CreatedIngredient { recipe_ingredient_id }))
        .message("Ingredient added successfully"))
}

#[get("/{recipe_id}/ingredients")]
pub async fn list_ingredients(
    recipe_service: web::Data<RecipeService>,
    recipe_id: web::Path<String>,
) -> Result<success::Success<Vec<RecipeIngredientEntity>>, error::Error> {
    let ingredients = recipe_service.list_ingredients(&recipe_id).await?;
    Ok(success::Success::ok(Some(ingredients)))
}

#[patch("/{ingredient_id}")]
pub async fn update_ingredient(
    recipe_service: web::Data<RecipeService>,
    ingredient_id: web::Path<String>,
    body: ValidatedJson<UpdateIngredientModel>,
) -> Result<success::Success<()>, error::Error> {
    recipe_service.update_ingredient(&ingredient_id, body.0).await?;
    Ok(success::Success::ok(None).message("Ingredient updated successfully"))
}

#[delete("/{ingredient_id}")]
pub async fn delete_ingredient(
    recipe_service: web::Data<RecipeService>,
    ingredient_id: web::Path<String>,
) -> Result<success::Success<()>, error::Error> {
    recipe_service.delete_ingredient(&ingredient_id).await?;
    Ok(success::Success::ok(None).message("Ingredient deleted successfully"))
}

#[post("/{recipe_id}/steps")]
pub async fn add_step(
    recipe_service: web::Data<RecipeService>,
    recipe_id: web::Path<String>,
    body: ValidatedJson<CreateStepModel>,
) -> Result<success::Success<()>, error::Error> {
    recipe_service.add_step(&recipe_id, body.0).await?;
    Ok(success::Success::created(None).message("Step added successfully"))
}

#[get("/{recipe_id}/steps")]
pub async fn list_steps(
    recipe_service: web::Data<RecipeService>,
    recipe_id: web::Path<String>,
) -> Result<success::Success<Vec<RecipeStepEntity>>, error::Error> {
    let steps = recipe_service.list_steps(&recipe_id).await?;
    Ok(success::Success::ok(Some(steps)))
}

#[patch("/{recipe_id}/steps/{step_number}")]
pub async fn update_step(
    recipe_service: web::Data<RecipeService>,
    path: web::Path<(String, String)>,
    body: ValidatedJson<UpdateStepModel>,
) -> Result<success::Success<()>, error::Error> {
    let (recipe_id, step_number) = path.into_inner();
    recipe_service.update_step(&recipe_id, &step_number, body.0).await?;
    Ok(success::Success::ok(None).message("Step updated successfully"))
}

#[delete("/{recipe_id}/steps/{step_number}")]
pub async fn delete_step(
    recipe_service: web::Data<RecipeService>,
    path: web::Path<(String, String)>,
) -> Result<success::Success<()>, error::Error> {
    let (recipe_id, step_number) = path.into_inner();
    recipe_service.delete_step(&recipe_id, &step_number).await?;
    Ok(success::Success::ok(None).message("Step deleted successfully"))
}
