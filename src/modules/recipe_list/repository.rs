use crate::api::error;
use crate::modules::{
    recipe::schema::RecipeEntity,
    recipe_list::{
        model::{InsertRecipeList, UpdateRecipeList},
        schema::RecipeListEntity,
    },
};

#[async_trait::async_trait]
pub trait RecipeListRepository {
    async fn list_exists(&self, list_id: i32) -> Result<bool, error::SystemError>;

    async fn find_lists_by_owner(
        &self,
        username: &str,
    ) -> Result<Vec<RecipeListEntity>, error::SystemError>;

    async fn create_list(&self, list: &InsertRecipeList) -> Result<i32, error::SystemError>;

    async fn update_list(
        &self,
        list_id: i32,
        list: &UpdateRecipeList,
    ) -> Result<bool, error::SystemError>;

    async fn delete_list(&self, list_id: i32) -> Result<bool, error::SystemError>;

    async fn find_list_recipes(&self, list_id: i32)
    -> Result<Vec<RecipeEntity>, error::SystemError>;

    async fn add_entry(&self, list_id: i32, recipe_id: i32) -> Result<bool, error::SystemError>;

    async fn remove_entry(&self, list_id: i32, recipe_id: i32)
    -> Result<bool, error::SystemError>;
}
