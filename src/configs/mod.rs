use log::{error, info, warn};
use sqlx::{
    pool::PoolConnection,
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool, Postgres,
};
use std::time::Duration;

use crate::{
    api::error,
    constants::{
        DB_POOL_ACQUIRE_TIMEOUT_SECS, DB_POOL_IDLE_TIMEOUT_SECS, DB_POOL_MAX_CONNECTIONS,
        DB_POOL_MIN_CONNECTIONS,
    },
    ENV,
};

fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(DB_POOL_MAX_CONNECTIONS)
        .min_connections(DB_POOL_MIN_CONNECTIONS)
        .idle_timeout(Duration::from_secs(DB_POOL_IDLE_TIMEOUT_SECS))
        .acquire_timeout(Duration::from_secs(DB_POOL_ACQUIRE_TIMEOUT_SECS))
        .acquire_slow_threshold(Duration::from_secs(3))
}

fn connect_options() -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&ENV.db_host)
        .port(ENV.db_port)
        .database(&ENV.db_service_name)
        .username(&ENV.db_user)
        .password(&ENV.db_password)
}

/// Process-wide connection pool, constructed once in `main` and handed to
/// every repository.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
    degraded: bool,
}

impl Database {
    /// Opens the pool. A failed first connection is logged and the pool falls
    /// back to lazy connects so the server still starts.
    pub async fn connect() -> Self {
        let options = connect_options();
        match pool_options().connect_with(options.clone()).await {
            Ok(pool) => {
                info!(
                    "Database pool ready ({}:{}/{})",
                    ENV.db_host, ENV.db_port, ENV.db_service_name
                );
                Self { pool, degraded: false }
            }
            Err(e) => {
                error!("Failed to initialize database pool: {e}");
                warn!("Starting in degraded mode, requests will fail until the database is reachable");
                Self { pool: pool_options().connect_lazy_with(options), degraded: true }
            }
        }
    }

    #[cfg(test)]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool, degraded: false }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Checks out one pooled connection. It goes back to the pool when the
    /// returned guard is dropped.
    pub async fn connection(&self) -> Result<PoolConnection<Postgres>, error::SystemError> {
        let conn = self.pool.acquire().await?;
        Ok(conn)
    }

    pub async fn migrate(&self) -> Result<(), error::SystemError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    pub async fn close(&self) {
        info!("Draining database pool");
        self.pool.close().await;
        info!("Database pool closed");
    }
}
