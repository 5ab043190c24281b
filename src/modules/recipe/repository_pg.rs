use crate::{
    api::error,
    configs::Database,
    modules::recipe::{
        model::{
            InsertIngredient, InsertRecipe, InsertStep, UpdateIngredient, UpdateRecipe,
            UpdateStep,
        },
        repository::{RecipeIngredientRepository, RecipeRepository, RecipeStepRepository},
        schema::{RecipeEntity, RecipeIngredientEntity, RecipeStepEntity},
    },
    utils::SparseUpdate,
};

#[derive(Clone)]
pub struct RecipeRepositoryPg {
    db: Database,
}

impl RecipeRepositoryPg {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl RecipeRepository for RecipeRepositoryPg {
    async fn exists(&self, recipe_id: i32) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes WHERE recipe_id = $1")
            .bind(recipe_id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(count > 0)
    }

    async fn find_by_id(
        &self,
        recipe_id: i32,
    ) -> Result<Option<RecipeEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let recipe = sqlx::query_as::<_, RecipeEntity>(
            "SELECT recipe_id, recipe_name, privacy_level, username FROM recipes WHERE recipe_id = $1",
        )
        .bind(recipe_id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(recipe)
    }

    async fn find_by_owner(&self, username: &str) -> Result<Vec<RecipeEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let recipes = sqlx::query_as::<_, RecipeEntity>(
            r#"
            SELECT recipe_id, recipe_name, privacy_level, username
            FROM recipes
            WHERE username = $1
            ORDER BY recipe_id
            "#,
        )
        .bind(username)
        .fetch_all(&mut *conn)
        .await?;
        Ok(recipes)
    }

    async fn find_public(&self) -> Result<Vec<RecipeEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let recipes = sqlx::query_as::<_, RecipeEntity>(
            r#"
            SELECT recipe_id, recipe_name, privacy_level, username
            FROM recipes
            WHERE privacy_level = 'Public'
            ORDER BY recipe_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(recipes)
    }

    async fn create(&self, recipe: &InsertRecipe) -> Result<i32, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let recipe_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO recipes (recipe_name, privacy_level, username)
            VALUES ($1, $2, $3)
            RETURNING recipe_id
            "#,
        )
        .bind(&recipe.recipe_name)
        .bind(recipe.privacy_level)
        .bind(&recipe.username)
        .fetch_one(&mut *conn)
        .await?;
        Ok(recipe_id)
    }

    async fn update(
        &self,
        recipe_id: i32,
        recipe: &UpdateRecipe,
    ) -> Result<bool, error::SystemError> {
        let mut query = SparseUpdate::new("recipes")
            .set("recipe_name", recipe.recipe_name.as_deref())
            .set("privacy_level", recipe.privacy_level)
            .finish("recipe_id", recipe_id)?;

        let mut conn = self.db.connection().await?;
        let rows = query.build().execute(&mut *conn).await?.rows_affected();
        Ok(rows > 0)
    }

    async fn delete(&self, recipe_id: i32) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query("DELETE FROM recipes WHERE recipe_id = $1")
            .bind(recipe_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }
}

#[async_trait::async_trait]
impl RecipeIngredientRepository for RecipeRepositoryPg {
    async fn find_ingredients(
        &self,
        recipe_id: i32,
    ) -> Result<Vec<RecipeIngredientEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let ingredients = sqlx::query_as::<_, RecipeIngredientEntity>(
            r#"
            SELECT recipe_ingredient_id, recipe_ingredient_name, recipe_id, amount, unit_of_measurement
            FROM recipe_ingredients
            WHERE recipe_id = $1
            ORDER BY recipe_ingredient_id
            "#,
        )
        .bind(recipe_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(ingredients)
    }

    async fn create_ingredient(
        &self,
        ingredient: &InsertIngredient,
    ) -> Result<i32, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let ingredient_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO recipe_ingredients (recipe_ingredient_name, recipe_id, amount, unit_of_measurement)
            VALUES ($1, $2, $3, $4)
            RETURNING recipe_ingredient_id
            "#,
        )
        .bind(&ingredient.recipe_ingredient_name)
        .bind(ingredient.recipe_id)
        .bind(ingredient.amount)
        .bind(&ingredient.unit_of_measurement)
        .fetch_one(&mut *conn)
        .await?;
        Ok(ingredient_id)
    }

    async fn update_ingredient(
        &self,
        ingredient_id: i32,
        ingredient: &UpdateIngredient,
    ) -> Result<bool, error::SystemError> {
        let mut query = SparseUpdate::new("recipe_ingredients")
            .set("recipe_ingredient_name", ingredient.recipe_ingredient_name.as_deref())
            .set("amount", ingredient.amount)
            .set(
                "unit_of_measurement",
                ingredient.unit_of_measurement.as_ref().map(|u| u.as_deref()),
            )
            .finish("recipe_ingredient_id", ingredient_id)?;

        let mut conn = self.db.connection().await?;
        let rows = query.build().execute(&mut *conn).await?.rows_affected();
        Ok(rows > 0)
    }

    async fn delete_ingredient(&self, ingredient_id: i32) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_ingredient_id = $1")
            .bind(ingredient_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }
}

#[async_trait::async_trait]
impl RecipeStepRepository for RecipeRepositoryPg {
    async fn find_steps(
        &self,
        recipe_id: i32,
    ) -> Result<Vec<RecipeStepEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let steps = sqlx::query_as::<_, RecipeStepEntity>(
            r#"
            SELECT recipe_id, step_number, step_information
            FROM recipe_steps
            WHERE recipe_id = $1
            ORDER BY step_number
            "#,
        )
        .bind(recipe_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(steps)
    }

    async fn create_step(&self, step: &InsertStep) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query(
            "INSERT INTO recipe_steps (recipe_id, step_number, step_information) VALUES ($1, $2, $3)",
        )
        .bind(step.recipe_id)
        .bind(step.step_number)
        .bind(&step.step_information)
        .execute(&mut *conn)
        .await?
        .rows_affected();
        Ok(rows > 0)
    }

    async fn update_step(
        &self,
        recipe_id: i32,
        step_number: i32,
        step: &UpdateStep,
    ) -> Result<bool, error::SystemError> {
        let mut query = SparseUpdate::new("recipe_steps")
            .set("step_information", step.step_information.as_deref())
            .finish("recipe_id", recipe_id)?;
        query.push(" AND step_number = ").push_bind(step_number);

        let mut conn = self.db.connection().await?;
        let rows = query.build().execute(&mut *conn).await?.rows_affected();
        Ok(rows > 0)
    }

    async fn delete_step(
        &self,
        recipe_id: i32,
        step_number: i32,
    ) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query("DELETE FROM recipe_steps WHERE recipe_id = $1 AND step_number = $2")
            .bind(recipe_id)
            .bind(step_number)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }
}
