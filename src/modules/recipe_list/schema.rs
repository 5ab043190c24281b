use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeListEntity {
    #[serde(rename = "RecipeListID")]
    pub recipe_list_id: i32,
    pub recipe_list_name: String,
    pub username: String,
}
