//! Logging bootstrap
//!
//! Structured console logging for the app shell, with an optional
//! daily-rolling file alongside the app's data.

use crate::core::config::AppConfig;

/// Initialize logging at the configured level
pub fn init_logger(config: &AppConfig) {
    init_logger_with_file(&config.log_level, None);
}

/// Initialize logging with optional file output
pub fn init_logger_with_file(log_level: &str, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Roll a daily file only when the directory already exists
    if let Some(dir) = log_dir
        && std::path::Path::new(dir).exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "aahar-app");
        subscriber.with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}
