use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCategoryModel {
    #[validate(length(min = 1, max = 128, message = "Category name must be 1 to 128 characters long"))]
    pub category_name: String,
}

#[derive(Deserialize, Validate)]
pub struct RecipeRefModel {
    #[serde(rename = "RecipeID")]
    #[validate(range(min = 1, message = "RecipeID must be positive"))]
    pub recipe_id: i32,
}
