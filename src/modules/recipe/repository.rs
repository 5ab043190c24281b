use crate::api::error;
use crate::modules::recipe::{
    model::{
        InsertIngredient, InsertRecipe, InsertStep, UpdateIngredient, UpdateRecipe, UpdateStep,
    },
    schema::{RecipeEntity, RecipeIngredientEntity, RecipeStepEntity},
};

#[async_trait::async_trait]
pub trait RecipeRepository {
    async fn exists(&self, recipe_id: i32) -> Result<bool, error::SystemError>;

    async fn find_by_id(&self, recipe_id: i32)
    -> Result<Option<RecipeEntity>, error::SystemError>;

    async fn find_by_owner(&self, username: &str) -> Result<Vec<RecipeEntity>, error::SystemError>;

    async fn find_public(&self) -> Result<Vec<RecipeEntity>, error::SystemError>;

    /// Returns the generated recipe id.
    async fn create(&self, recipe: &InsertRecipe) -> Result<i32, error::SystemError>;

    async fn update(
        &self,
        recipe_id: i32,
        recipe: &UpdateRecipe,
    ) -> Result<bool, error::SystemError>;

    async fn delete(&self, recipe_id: i32) -> Result<bool, error::SystemError>;
}

#[async_trait::async_trait]
pub trait RecipeIngredientRepository {
    async fn find_ingredients(
        &self,
        recipe_id: i32,
    ) -> Result<Vec<RecipeIngredientEntity>, error::SystemError>;

    async fn create_ingredient(
        &self,
        ingredient: &InsertIngredient,
    ) -> Result<i32, error::SystemError>;

    async fn update_ingredient(
        &self,
        ingredient_id: i32,
        ingredient: &UpdateIngredient,
    ) -> Result<bool, error::SystemError>;

    async fn delete_ingredient(&self, ingredient_id: i32) -> Result<bool, error::SystemError>;
}

#[async_trait::async_trait]
pub trait RecipeStepRepository {
    async fn find_steps(&self, recipe_id: i32)
    -> Result<Vec<RecipeStepEntity>, error::SystemError>;

    async fn create_step(&self, step: &InsertStep) -> Result<bool, error::SystemError>;

    async fn update_step(
        &self,
        recipe_id: i32,
        step_number: i32,
        step: &UpdateStep,
    ) -> Result<bool, error::SystemError>;

    async fn delete_step(&self, recipe_id: i32, step_number: i32)
    -> Result<bool, error::SystemError>;
}

pub trait RecipeRepo:
    RecipeRepository + RecipeIngredientRepository + RecipeStepRepository + Send + Sync
{
}

impl<T> RecipeRepo for T where
    T: RecipeRepository + RecipeIngredientRepository + RecipeStepRepository + Send + Sync
{
}
