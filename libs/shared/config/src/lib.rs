use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT is not a valid port number, using 3000");
                3000
            }),
            Err(_) => 3000,
        };

        let database_file = env::var("DATABASE_FILE")
            .unwrap_or_else(|_| "data.db".to_string());

        Self {
            port,
            database_file,
        }
    }
}
