use log::info;
use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        recipe::{
            model::{
                CreateIngredientModel, CreateRecipeModel, CreateStepModel, InsertIngredient,
                InsertRecipe, InsertStep, UpdateIngredient, UpdateIngredientModel, UpdateRecipe,
                UpdateRecipeModel, UpdateStep, UpdateStepModel,
            },
            repository::RecipeRepo,
            schema::{RecipeEntity, RecipeIngredientEntity, RecipeStepEntity},
        },
        user::repository::UserRepository,
    },
    utils::parse_id,
};

#[derive(Clone)]
pub struct RecipeService {
    recipe_repo: Arc<dyn RecipeRepo>,
    user_repo: Arc<dyn UserRepository + Send + Sync>,
}

fn recipe_id(raw: &str) -> Result<i32, error::SystemError> {
    parse_id(raw).ok_or_else(|| error::SystemError::not_found("Recipe not found"))
}

fn ingredient_id(raw: &str) -> Result<i32, error::SystemError> {
    parse_id(raw).ok_or_else(|| error::SystemError::not_found("Ingredient not found"))
}

fn step_number(raw: &str) -> Result<i32, error::SystemError> {
    parse_id(raw).ok_or_else(|| error::SystemError::not_found("Step not found"))
}

impl RecipeService {
    pub fn with_dependencies(
        recipe_repo: Arc<dyn RecipeRepo>,
        user_repo: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        RecipeService { recipe_repo, user_repo }
    }

    /// Resolves a raw id to an existing recipe id.
    async fn existing_recipe(&self, raw: &str) -> Result<i32, error::SystemError> {
        let id = recipe_id(raw)?;
        if !self.recipe_repo.exists(id).await? {
            return Err(error::SystemError::not_found("Recipe not found"));
        }
        Ok(id)
    }

    pub async fn get(&self, raw_id: &str) -> Result<RecipeEntity, error::SystemError> {
        self.recipe_repo
            .find_by_id(recipe_id(raw_id)?)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Recipe not found"))
    }

    pub async fn list_by_owner(
        &self,
        username: &str,
    ) -> Result<Vec<RecipeEntity>, error::SystemError> {
        self.recipe_repo.find_by_owner(username).await
    }

    pub async fn list_public(&self) -> Result<Vec<RecipeEntity>, error::SystemError> {
        self.recipe_repo.find_public().await
    }

    pub async fn create(&self, recipe: CreateRecipeModel) -> Result<i32, error::SystemError> {
        if !self.user_repo.exists(&recipe.username).await? {
            return Err(error::SystemError::not_found("User not found"));
        }

        let new_recipe = InsertRecipe {
            recipe_name: recipe.recipe_name,
            privacy_level: recipe.privacy_level.unwrap_or_default(),
            username: recipe.username,
        };
        let id = self.recipe_repo.create(&new_recipe).await?;
        info!("Recipe {} created for {}", id, new_recipe.username);
        Ok(id)
    }

    pub async fn update(
        &self,
        raw_id: &str,
        recipe: UpdateRecipeModel,
    ) -> Result<(), error::SystemError> {
        let id = recipe_id(raw_id)?;
        let update_recipe =
            UpdateRecipe { recipe_name: recipe.recipe_name, privacy_level: recipe.privacy_level };

        if update_recipe.is_empty() {
            return Err(error::SystemError::bad_request("No fields to update"));
        }

        if !self.recipe_repo.update(id, &update_recipe).await? {
            return Err(error::SystemError::not_found("Recipe not found"));
        }
        Ok(())
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), error::SystemError> {
        if !self.recipe_repo.delete(recipe_id(raw_id)?).await? {
            return Err(error::SystemError::not_found("Recipe not found"));
        }
        Ok(())
    }

    pub async fn list_ingredients(
        &self,
        raw_recipe_id: &str,
    ) -> Result<Vec<RecipeIngredientEntity>, error::SystemError> {
        self.recipe_repo.find_ingredients(recipe_id(raw_recipe_id)?).await
    }

    pub async fn add_ingredient(
        &self,
        raw_recipe_id: &str,
        ingredient: CreateIngredientModel,
    ) -> Result<i32, error::SystemError> {
        let recipe_id = self.existing_recipe(raw_recipe_id).await?;

        let new_ingredient = InsertIngredient {
            recipe_ingredient_name: ingredient.recipe_ingredient_name,
            recipe_id,
            amount: ingredient.amount,
            unit_of_measurement: ingredient.unit_of_measurement,
        };
        self.recipe_repo.create_ingredient(&new_ingredient).await
    }

    pub async fn update_ingredient(
        &self,
        raw_ingredient_id: &str,
        ingredient: UpdateIngredientModel,
    ) -> Result<(), error::SystemError> {
        let id = ingredient_id(raw_ingredient_id)?;
        let update_ingredient = UpdateIngredient {
            recipe_ingredient_name: ingredient.recipe_ingredient_name,
            amount: ingredient.amount,
            unit_of_measurement: ingredient.unit_of_measurement,
        };

        if update_ingredient.is_empty() {
            return Err(error::SystemError::bad_request("No fields to update"));
        }
        if matches!(update_ingredient.amount, Some(Some(amount)) if amount < 0.0) {
            return Err(error::SystemError::bad_request("Amount cannot be negative"));
        }

        if !self.recipe_repo.update_ingredient(id, &update_ingredient).await? {
            return Err(error::SystemError::not_found("Ingredient not found"));
        }
        Ok(())
    }

    pub async fn delete_ingredient(&self, raw_ingredient_id: &str) -> Result<(), error::SystemError> {
        if !self.recipe_repo.delete_ingredient(ingredient_id(raw_ingredient_id)?).await? {
            return Err(error::SystemError::not_found("Ingredient not found"));
        }
        Ok(())
    }

    pub async fn list_steps(
        &self,
        raw_recipe_id: &str,
    ) -> Result<Vec<RecipeStepEntity>, error::SystemError> {
        self.recipe_repo.find_steps(recipe_id(raw_recipe_id)?).await
    }

    pub async fn add_step(
        &self,
        raw_recipe_id: &str,
        step: CreateStepModel,
    ) -> Result<(), error::SystemError> {
        let recipe_id = self.existing_recipe(raw_recipe_id).await?;

        let new_step = InsertStep {
            recipe_id,
            step_number: step.step_number,
            step_information: step.step_information,
        };
        if !self.recipe_repo.create_step(&new_step).await? {
            return Err(error::SystemError::DatabaseError("Step was not inserted".into()));
        }
        Ok(())
    }

    pub async fn update_step(
        &self,
        raw_recipe_id: &str,
        raw_step_number: &str,
        step: UpdateStepModel,
    ) -> Result<(), error::SystemError> {
        let (id, number) = (recipe_id(raw_recipe_id)?, step_number(raw_step_number)?);
        let update_step = UpdateStep { step_information: step.step_information };

        if update_step.is_empty() {
            return Err(error::SystemError::bad_request("No fields to update"));
        }

        if !self.recipe_repo.update_step(id, number, &update_step).await? {
            return Err(error::SystemError::not_found("Step not found"));
        }
        Ok(())
    }

    pub async fn delete_step(
        &self,
        raw_recipe_id: &str,
        raw_step_number: &str,
    ) -> Result<(), error::SystemError> {
        let (id, number) = (recipe_id(raw_recipe_id)?, step_number(raw_step_number)?);
        if !self.recipe_repo.delete_step(id, number).await? {
            return Err(error::SystemError::not_found("Step not found"));
        }
        Ok(())
    }
}
