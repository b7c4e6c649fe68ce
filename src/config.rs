use std::env;

use dotenv::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub cors_origin: String,
}

impl Config {
    pub fn init() -> Config {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            panic!("🔒 DATABASE_URL environment variable must be set!");
        });

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Config {
            database_url,
            cors_origin,
        }
    }
}
