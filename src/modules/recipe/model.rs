use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::user::schema::PrivacyLevel;
use crate::utils::double_option;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRecipeModel {
    #[validate(length(min = 1, max = 255, message = "Recipe name must be 1 to 255 characters long"))]
    pub recipe_name: String,
    pub privacy_level: Option<PrivacyLevel>,
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRecipeModel {
    #[validate(length(min = 1, max = 255, message = "Recipe name must be 1 to 255 characters long"))]
    pub recipe_name: Option<String>,
    pub privacy_level: Option<PrivacyLevel>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateIngredientModel {
    #[validate(length(min = 1, message = "Ingredient name cannot be empty"))]
    pub recipe_ingredient_name: String,
    #[validate(range(min = 0.0, message = "Amount cannot be negative"))]
    pub amount: Option<f64>,
    pub unit_of_measurement: Option<String>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateIngredientModel {
    #[validate(length(min = 1, message = "Ingredient name cannot be empty"))]
    pub recipe_ingredient_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub amount: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub unit_of_measurement: Option<Option<String>>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStepModel {
    #[validate(range(min = 1, message = "Step number must be at least 1"))]
    pub step_number: i32,
    #[validate(length(min = 1, message = "Step information cannot be empty"))]
    pub step_information: String,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateStepModel {
    #[validate(length(min = 1, message = "Step information cannot be empty"))]
    pub step_information: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedRecipe {
    #[serde(rename = "RecipeID")]
    pub recipe_id: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedIngredient {
    #[serde(rename = "RecipeIngredientID")]
    pub recipe_ingredient_id: i32,
}

pub struct InsertRecipe {
    pub recipe_name: String,
    pub privacy_level: PrivacyLevel,
    pub username: String,
}

#[derive(Default)]
pub struct UpdateRecipe {
    pub recipe_name: Option<String>,
    pub privacy_level: Option<PrivacyLevel>,
}

pub struct InsertIngredient {
    pub recipe_ingredient_name: String,
    pub recipe_id: i32,
    pub amount: Option<f64>,
    pub unit_of_measurement: Option<String>,
}

#[derive(Default)]
pub struct UpdateIngredient {
    pub recipe_ingredient_name: Option<String>,
    pub amount: Option<Option<f64>>,
    pub unit_of_measurement: Option<Option<String>>,
}

pub struct InsertStep {
    pub recipe_id: i32,
    pub step_number: i32,
    pub step_information: String,
}

#[derive(Default)]
pub struct UpdateStep {
    pub step_information: Option<String>,
}

impl UpdateRecipe {
    pub fn is_empty(&self) -> bool {
        self.recipe_name.is_none() && self.privacy_level.is_none()
    }
}

impl UpdateIngredient {
    pub fn is_empty(&self) -> bool {
        self.recipe_ingredient_name.is_none()
            && self.amount.is_none()
            && self.unit_of_measurement.is_none()
    }
}

impl UpdateStep {
    pub fn is_empty(&self) -> bool {
        self.step_information.is_none()
    }
}
