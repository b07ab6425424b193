use std::env;

/// Application configuration read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Tracing filter directive, e.g. "info" or "calistheniq=debug"
    pub log_filter: String,
    /// Default athlete name for interactive sessions
    pub user_name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            log_filter: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            user_name: env::var("COACH_USER").unwrap_or_else(|_| "Athlete".to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
