use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryEntity {
    pub category_name: String,
}
