//! Application configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | AAHAR_DATA_DIR | ./data | Directory for the local key-value store |
//! | AAHAR_LOG_LEVEL | info | Log level |

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the key-value store files
    pub data_dir: String,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            data_dir: std::env::var("AAHAR_DATA_DIR").unwrap_or_else(|_| "./data".into()),
            log_level: std::env::var("AAHAR_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Override the data directory, typically for tests
    pub fn with_data_dir(dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = dir.into();
        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
