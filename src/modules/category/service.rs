use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        category::{repository::CategoryRepository, schema::CategoryEntity},
        recipe::{repository::RecipeRepo, schema::RecipeEntity},
    },
    utils::parse_id,
};

#[derive(Clone)]
pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepository + Send + Sync>,
    recipe_repo: Arc<dyn RecipeRepo>,
}

impl CategoryService {
    pub fn with_dependencies(
        category_repo: Arc<dyn CategoryRepository + Send + Sync>,
        recipe_repo: Arc<dyn RecipeRepo>,
    ) -> Self {
        CategoryService { category_repo, recipe_repo }
    }

    pub async fn list(&self) -> Result<Vec<CategoryEntity>, error::SystemError> {
        self.category_repo.find_categories().await
    }

    pub async fn create(&self, category_name: &str) -> Result<(), error::SystemError> {
        let name = category_name.trim();
        if name.is_empty() {
            return Err(error::SystemError::bad_request("Category name cannot be empty"));
        }
        if !self.category_repo.create_category(name).await? {
            return Err(error::SystemError::DatabaseError("Category was not inserted".into()));
        }
        Ok(())
    }

    pub async fn delete(&self, category_name: &str) -> Result<(), error::SystemError> {
        if !self.category_repo.delete_category(category_name).await? {
            return Err(error::SystemError::not_found("Category not found"));
        }
        Ok(())
    }

    pub async fn list_recipes(
        &self,
        category_name: &str,
    ) -> Result<Vec<RecipeEntity>, error::SystemError> {
        self.category_repo.find_category_recipes(category_name).await
    }

    pub async fn add_recipe(
        &self,
        category_name: &str,
        recipe_id: i32,
    ) -> Result<(), error::SystemError> {
        let (category_exists, recipe_exists) = tokio::try_join!(
            self.category_repo.category_exists(category_name),
            self.recipe_repo.exists(recipe_id),
        )?;
        if !category_exists {
            return Err(error::SystemError::not_found("Category not found"));
        }
        if !recipe_exists {
            return Err(error::SystemError::not_found("Recipe not found"));
        }

        if !self.category_repo.link_recipe(category_name, recipe_id).await? {
            return Err(error::SystemError::DatabaseError("Recipe was not categorized".into()));
        }
        Ok(())
    }

    pub async fn remove_recipe(
        &self,
        category_name: &str,
        raw_recipe_id: &str,
    ) -> Result<(), error::SystemError> {
        let recipe_id =
            parse_id(raw_recipe_id).ok_or_else(|| error::SystemError::not_found("Recipe not found"))?;
        if !self.category_repo.unlink_recipe(category_name, recipe_id).await? {
            return Err(error::SystemError::not_found("Recipe is not in this category"));
        }
        Ok(())
    }
}
