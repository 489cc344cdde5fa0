use serde::{Deserialize, Serialize};

use crate::core::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

// Configuration abstracts config options for the bookstore service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub http_port: u16,
    pub database_path: String,
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Configuration {
    pub fn new(database_path: &str) -> Self {
        Configuration {
            http_port: 8080,
            database_path: database_path.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }

    pub fn from_env() -> Self {
        Configuration {
            http_port: env_or("HTTP_PORT", 8080),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "bookstore.db".to_string()),
            default_page_size: env_or("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            max_page_size: env_or("MAX_PAGE_SIZE", MAX_PAGE_SIZE),
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
