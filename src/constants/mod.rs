pub const DB_POOL_MIN_CONNECTIONS: u32 = 1;
pub const DB_POOL_MAX_CONNECTIONS: u32 = 3;
pub const DB_POOL_IDLE_TIMEOUT_SECS: u64 = 60;
pub const DB_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

pub struct Env {
    pub db_host: String,
    pub db_port: u16,
    pub db_service_name: String,
    pub db_user: String,
    pub db_password: String,
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
    pub shutdown_grace_secs: u64,
}

impl Env {
    fn new() -> Self {
        let db_host = std::env::var("DB_HOST")
            .expect("DB_HOST must be set in .env file or environment variable");
        let db_port = std::env::var("DB_PORT")
            .expect("DB_PORT must be set in .env file or environment variable")
            .parse::<u16>()
            .expect("DB_PORT must be a valid u16 integer");
        let db_service_name = std::env::var("DB_SERVICE_NAME")
            .expect("DB_SERVICE_NAME must be set in .env file or environment variable");
        let db_user = std::env::var("DB_USER")
            .expect("DB_USER must be set in .env file or environment variable");
        let db_password = std::env::var("DB_PASSWORD")
            .expect("DB_PASSWORD must be set in .env file or environment variable");

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        let shutdown_grace_secs = std::env::var("SHUTDOWN_GRACE_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .expect("SHUTDOWN_GRACE_SECS must be a valid u64 integer");
        Env {
            db_host,
            db_port,
            db_service_name,
            db_user,
            db_password,
            frontend_url,
            ip,
            port,
            shutdown_grace_secs,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
