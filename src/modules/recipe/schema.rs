use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::modules::user::schema::PrivacyLevel;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeEntity {
    #[serde(rename = "RecipeID")]
    pub recipe_id: i32,
    pub recipe_name: String,
    pub privacy_level: PrivacyLevel,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeIngredientEntity {
    #[serde(rename = "RecipeIngredientID")]
    pub recipe_ingredient_id: i32,
    pub recipe_ingredient_name: String,
    #[serde(rename = "RecipeID")]
    pub recipe_id: i32,
    pub amount: Option<f64>,
    pub unit_of_measurement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeStepEntity {
    #[serde(rename = "RecipeID")]
    pub recipe_id: i32,
    pub step_number: i32,
    pub step_information: String,
}
