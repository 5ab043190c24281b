use crate::{
    api::error,
    configs::Database,
    modules::{
        recipe::schema::RecipeEntity,
        recipe_list::{
            model::{InsertRecipeList, UpdateRecipeList},
            repository::RecipeListRepository,
            schema::RecipeListEntity,
        },
    },
    utils::SparseUpdate,
};

#[derive(Clone)]
pub struct RecipeListRepositoryPg {
    db: Database,
}

impl RecipeListRepositoryPg {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl RecipeListRepository for RecipeListRepositoryPg {
    async fn list_exists(&self, list_id: i32) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM recipe_lists WHERE recipe_list_id = $1")
                .bind(list_id)
                .fetch_one(&mut *conn)
                .await?;
        Ok(count > 0)
    }

    async fn find_lists_by_owner(
        &self,
        username: &str,
    ) -> Result<Vec<RecipeListEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let lists = sqlx::query_as::<_, RecipeListEntity>(
            r#"
            SELECT recipe_list_id, recipe_list_name, username
            FROM recipe_lists
            WHERE username = $1
            ORDER BY recipe_list_id
            "#,
        )
        .bind(username)
        .fetch_all(&mut *conn)
        .await?;
        Ok(lists)
    }

    async fn create_list(&self, list: &InsertRecipeList) -> Result<i32, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let list_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO recipe_lists (recipe_list_name, username)
            VALUES ($1, $2)
            RETURNING recipe_list_id
            "#,
        )
        .bind(&list.recipe_list_name)
        .bind(&list.username)
        .fetch_one(&mut *conn)
        .await?;
        Ok(list_id)
    }

    async fn update_list(
        &self,
        list_id: i32,
        list: &UpdateRecipeList,
    ) -> Result<bool, error::SystemError> {
        let mut query = SparseUpdate::new("recipe_lists")
            .set("recipe_list_name", list.recipe_list_name.as_deref())
            .finish("recipe_list_id", list_id)?;

        let mut conn = self.db.connection().await?;
        let rows = query.build().execute(&mut *conn).await?.rows_affected();
        Ok(rows > 0)
    }

    async fn delete_list(&self, list_id: i32) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query("DELETE FROM recipe_lists WHERE recipe_list_id = $1")
            .bind(list_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }

    async fn find_list_recipes(
        &self,
        list_id: i32,
    ) -> Result<Vec<RecipeEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let recipes = sqlx::query_as::<_, RecipeEntity>(
            r#"
            SELECT r.recipe_id, r.recipe_name, r.privacy_level, r.username
            FROM recipe_list_entries e
            JOIN recipes r ON r.recipe_id = e.recipe_id
            WHERE e.recipe_list_id = $1
            ORDER BY r.recipe_id
            "#,
        )
        .bind(list_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(recipes)
    }

    async fn add_entry(&self, list_id: i32, recipe_id: i32) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query(
            "INSERT INTO recipe_list_entries (recipe_list_id, recipe_id) VALUES ($1, $2)",
        )
        .bind(list_id)
        .bind(recipe_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();
        Ok(rows > 0)
    }

    async fn remove_entry(
        &self,
        list_id: i32,
        recipe_id: i32,
    ) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query(
            "DELETE FROM recipe_list_entries WHERE recipe_list_id = $1 AND recipe_id = $2",
        )
        .bind(list_id)
        .bind(recipe_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();
        Ok(rows > 0)
    }
}
