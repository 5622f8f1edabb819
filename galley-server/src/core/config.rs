//! Server configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Env var | Default | Meaning |
//! |---------|---------|---------|
//! | WORK_DIR | /var/lib/galley | Working directory (database, logs) |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | LOG_LEVEL | galley_server=info | Default tracing filter |
//! | ENVIRONMENT | development | development / staging / production |

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the embedded database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Default tracing filter (RUST_LOG takes precedence)
    pub log_level: String,
    /// Deployment environment
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/galley".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "galley_server=info,tower_http=info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Path of the embedded database under the working directory
    pub fn db_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("data")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
