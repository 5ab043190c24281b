use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRecipeListModel {
    #[validate(length(min = 1, max = 255, message = "List name must be 1 to 255 characters long"))]
    pub recipe_list_name: String,
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRecipeListModel {
    #[validate(length(min = 1, max = 255, message = "List name must be 1 to 255 characters long"))]
    pub recipe_list_name: Option<String>,
}

#[derive(Serialize)]
pub struct CreatedRecipeList {
    #[serde(rename = "RecipeListID")]
    pub recipe_list_id: i32,
}

pub struct InsertRecipeList {
    pub recipe_list_name: String,
    pub username: String,
}

#[derive(Default)]
pub struct UpdateRecipeList {
    pub recipe_list_name: Option<String>,
}

impl UpdateRecipeList {
    pub fn is_empty(&self) -> bool {
        self.recipe_list_name.is_none()
    }
}
