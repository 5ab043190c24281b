use crate::api::error;
use crate::modules::{category::schema::CategoryEntity, recipe::schema::RecipeEntity};

#[async_trait::async_trait]
pub trait CategoryRepository {
    async fn category_exists(&self, category_name: &str) -> Result<bool, error::SystemError>;

    async fn find_categories(&self) -> Result<Vec<CategoryEntity>, error::SystemError>;

    async fn create_category(&self, category_name: &str) -> Result<bool, error::SystemError>;

    async fn delete_category(&self, category_name: &str) -> Result<bool, error::SystemError>;

    async fn find_category_recipes(
        &self,
        category_name: &str,
    ) -> Result<Vec<RecipeEntity>, error::SystemError>;

    async fn link_recipe(
        &self,
        category_name: &str,
        recipe_id: i32,
    ) -> Result<bool, error::SystemError>;

    async fn unlink_recipe(
        &self,
        category_name: &str,
        recipe_id: i32,
    ) -> Result<bool, error::SystemError>;
}
