use sqlx::{Encode, Postgres, QueryBuilder, Type};

use crate::api::error;

/// Builds an `UPDATE` touching only the columns whose new value was supplied.
///
/// Columns are emitted in the order `set` is called. The key is bound last.
/// Finishing with nothing set is rejected before any statement exists.
pub struct SparseUpdate<'args> {
    table: &'static str,
    query: QueryBuilder<'args, Postgres>,
    columns: Vec<&'static str>,
}

impl<'args> SparseUpdate<'args> {
    pub fn new(table: &'static str) -> Self {
        Self { table, query: QueryBuilder::new(format!("UPDATE {table} SET ")), columns: Vec::new() }
    }

    pub fn set<T>(mut self, column: &'static str, value: Option<T>) -> Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if let Some(value) = value {
            if !self.columns.is_empty() {
                self.query.push(", ");
            }
            self.query.push(column).push(" = ").push_bind(value);
            self.columns.push(column);
        }
        self
    }

    pub fn finish<K>(
        mut self,
        key_column: &'static str,
        key: K,
    ) -> Result<QueryBuilder<'args, Postgres>, error::SystemError>
    where
        K: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if self.columns.is_empty() {
            return Err(error::SystemError::bad_request("No fields to update"));
        }

        log::debug!("Sparse update on {}: {:?}", self.table, self.columns);

        self.query.push(" WHERE ").push(key_column).push(" = ").push_bind(key);
        Ok(self.query)
    }
}
