use crate::{
    api::error,
    configs::Database,
    modules::{
        category::{repository::CategoryRepository, schema::CategoryEntity},
        recipe::schema::RecipeEntity,
    },
};

#[derive(Clone)]
pub struct CategoryRepositoryPg {
    db: Database,
}

impl CategoryRepositoryPg {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl CategoryRepository for CategoryRepositoryPg {
    async fn category_exists(&self, category_name: &str) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE category_name = $1")
                .bind(category_name)
                .fetch_one(&mut *conn)
                .await?;
        Ok(count > 0)
    }

    async fn find_categories(&self) -> Result<Vec<CategoryEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let categories = sqlx::query_as::<_, CategoryEntity>(
            "SELECT category_name FROM categories ORDER BY category_name",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(categories)
    }

    async fn create_category(&self, category_name: &str) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query("INSERT INTO categories (category_name) VALUES ($1)")
            .bind(category_name)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }

    async fn delete_category(&self, category_name: &str) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query("DELETE FROM categories WHERE category_name = $1")
            .bind(category_name)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }

    async fn find_category_recipes(
        &self,
        category_name: &str,
    ) -> Result<Vec<RecipeEntity>, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let recipes = sqlx::query_as::<_, RecipeEntity>(
            r#"
            SELECT r.recipe_id, r.recipe_name, r.privacy_level, r.username
            FROM recipe_categories rc
            JOIN recipes r ON r.recipe_id = rc.recipe_id
            WHERE rc.category_name = $1
            ORDER BY r.recipe_id
            "#,
        )
        .bind(category_name)
        .fetch_all(&mut *conn)
        .await?;
        Ok(recipes)
    }

    async fn link_recipe(
        &self,
        category_name: &str,
        recipe_id: i32,
    ) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows =
            sqlx::query("INSERT INTO recipe_categories (recipe_id, category_name) VALUES ($1, $2)")
                .bind(recipe_id)
                .bind(category_name)
                .execute(&mut *conn)
                .await?
                .rows_affected();
        Ok(rows > 0)
    }

    async fn unlink_recipe(
        &self,
        category_name: &str,
        recipe_id: i32,
    ) -> Result<bool, error::SystemError> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query(
            "DELETE FROM recipe_categories WHERE recipe_id = $1 AND category_name = $2",
        )
        .bind(recipe_id)
        .bind(category_name)
        .execute(&mut *conn)
        .await?
        .rows_affected();
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::*;
    use crate::test::{insert_recipe, insert_users};

    #[sqlx::test(migrations = "./migrations")]
    async fn links_are_unique_and_need_both_sides(pool: PgPool) {
        insert_users(&pool, &["alice"]).await;
        let waffles = insert_recipe(&pool, "alice", "Waffles").await;
        let repo = CategoryRepositoryPg::new(Database::from_pool(pool));

        assert!(repo.create_category("Breakfast").await.unwrap());
        assert!(matches!(
            repo.create_category("Breakfast").await.unwrap_err(),
            error::SystemError::Conflict(_)
        ));
        assert!(repo.category_exists("Breakfast").await.unwrap());

        assert!(repo.link_recipe("Breakfast", waffles).await.unwrap());
        assert!(matches!(
            repo.link_recipe("Breakfast", waffles).await.unwrap_err(),
            error::SystemError::Conflict(_)
        ));
        assert!(matches!(
            repo.link_recipe("Dessert", waffles).await.unwrap_err(),
            error::SystemError::NotFound(_)
        ));

        let recipes = repo.find_category_recipes("Breakfast").await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].recipe_name, "Waffles");

        assert!(repo.unlink_recipe("Breakfast", waffles).await.unwrap());
        assert!(!repo.unlink_recipe("Breakfast", waffles).await.unwrap());
        assert!(repo.find_category_recipes("Breakfast").await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn deleting_a_category_drops_its_links(pool: PgPool) {
        insert_users(&pool, &["alice"]).await;
        let waffles = insert_recipe(&pool, "alice", "Waffles").await;
        let repo = CategoryRepositoryPg::new(Database::from_pool(pool.clone()));

        repo.create_category("Breakfast").await.unwrap();
        repo.link_recipe("Breakfast", waffles).await.unwrap();

        assert!(repo.delete_category("Breakfast").await.unwrap());
        assert!(!repo.delete_category("Breakfast").await.unwrap());
        assert!(repo.find_categories().await.unwrap().is_empty());

        let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipe_categories")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(links, 0);
    }
}
