use log::info;
use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        recipe::{repository::RecipeRepo, schema::RecipeEntity},
        recipe_list::{
            model::{
                CreateRecipeListModel, InsertRecipeList, UpdateRecipeList, UpdateRecipeListModel,
            },
            repository::RecipeListRepository,
            schema::RecipeListEntity,
        },
        user::repository::UserRepository,
    },
    utils::parse_id,
};

#[derive(Clone)]
pub struct RecipeListService {
    list_repo: Arc<dyn RecipeListRepository + Send + Sync>,
    recipe_repo: Arc<dyn RecipeRepo>,
    user_repo: Arc<dyn UserRepository + Send + Sync>,
}

fn list_id(raw: &str) -> Result<i32, error::SystemError> {
    parse_id(raw).ok_or_else(|| error::SystemError::not_found("Recipe list not found"))
}

impl RecipeListService {
    pub fn with_dependencies(
        list_repo: Arc<dyn RecipeListRepository + Send + Sync>,
        recipe_repo: Arc<dyn RecipeRepo>,
        user_repo: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        RecipeListService { list_repo, recipe_repo, user_repo }
    }

    pub async fn list_by_owner(
        &self,
        username: &str,
    ) -> Result<Vec<RecipeListEntity>, error::SystemError> {
        self.list_repo.find_lists_by_owner(username).await
    }

    pub async fn create(&self, list: CreateRecipeListModel) -> Result<i32, error::SystemError> {
        if !self.user_repo.exists(&list.username).await? {
            return Err(error::SystemError::not_found("User not found"));
        }

        let new_list =
            InsertRecipeList { recipe_list_name: list.recipe_list_name, username: list.username };
        let id = self.list_repo.create_list(&new_list).await?;
        info!("Recipe list {} created for {}", id, new_list.username);
        Ok(id)
    }

    pub async fn update(
        &self,
        raw_list_id: &str,
        list: UpdateRecipeListModel,
    ) -> Result<(), error::SystemError> {
        let id = list_id(raw_list_id)?;
        let update_list = UpdateRecipeList { recipe_list_name: list.recipe_list_name };

        if update_list.is_empty() {
            return Err(error::SystemError::bad_request("No fields to update"));
        }

        if !self.list_repo.update_list(id, &update_list).await? {
            return Err(error::SystemError::not_found("Recipe list not found"));
        }
        Ok(())
    }

    pub async fn delete(&self, raw_list_id: &str) -> Result<(), error::SystemError> {
        if !self.list_repo.delete_list(list_id(raw_list_id)?).await? {
            return Err(error::SystemError::not_found("Recipe list not found"));
        }
        Ok(())
    }

    pub async fn list_recipes(
        &self,
        raw_list_id: &str,
    ) -> Result<Vec<RecipeEntity>, error::SystemError> {
        self.list_repo.find_list_recipes(list_id(raw_list_id)?).await
    }

    pub async fn add_recipe(
        &self,
        raw_list_id: &str,
        recipe_id: i32,
    ) -> Result<(), error::SystemError> {
        let id = list_id(raw_list_id)?;

        let (list_exists, recipe_exists) = tokio::try_join!(
            self.list_repo.list_exists(id),
            self.recipe_repo.exists(recipe_id),
        )?;
        if !list_exists {
            return Err(error::SystemError::not_found("Recipe list not found"));
        }
        if !recipe_exists {
            return Err(error::SystemError::not_found("Recipe not found"));
        }

        if !self.list_repo.add_entry(id, recipe_id).await? {
            return Err(error::SystemError::DatabaseError("Recipe was not added to list".into()));
        }
        Ok(())
    }

    pub async fn remove_recipe(
        &self,
        raw_list_id: &str,
        raw_recipe_id: &str,
    ) -> Result<(), error::SystemError> {
        let id = list_id(raw_list_id)?;
        let recipe_id =
            parse_id(raw_recipe_id).ok_or_else(|| error::SystemError::not_found("Recipe not found"))?;

        if !self.list_repo.remove_entry(id, recipe_id).await? {
            return Err(error::SystemError::not_found("Recipe is not in this list"));
        }
        Ok(())
    }
}
