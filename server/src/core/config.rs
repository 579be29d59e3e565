use crate::auth::JwtConfig;

/// Storage engine selected at startup.
///
/// `Disk` keeps everything in an embedded RocksDB store under the data
/// directory; `Memory` is the ephemeral in-process variant used for demos
/// and tests, where the whole dataset dies with the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Disk,
    Memory,
}

impl StorageMode {
    fn from_env() -> Self {
        match std::env::var("STORAGE_MODE").as_deref() {
            Ok("memory") => StorageMode::Memory,
            _ => StorageMode::Disk,
        }
    }
}

/// Outbound mail configuration.
///
/// The transport is a transactional-mail HTTP API; when `api_url`/`api_key`
/// are unset the mailer is disabled and every send is skipped with a
/// warning.
#[derive(Debug, Clone, Default)]
pub struct MailConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    /// From header, e.g. `"Savannah Restaurant <no-reply@savannah.example>"`
    pub from: String,
    /// Recipient of admin alerts (new orders, reservations, enquiries)
    pub admin_email: Option<String>,
}

impl MailConfig {
    fn from_env() -> Self {
        Self {
            api_url: std::env::var("MAIL_API_URL").ok(),
            api_key: std::env::var("MAIL_API_KEY").ok(),
            from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "Savannah Restaurant <no-reply@localhost>".into()),
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Notes |
/// |----------|---------|-------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | DATA_DIR | ./data | RocksDB store and rolling logs |
/// | STORAGE_MODE | disk | `disk` or `memory` |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | PUBLIC_BASE_URL | http://localhost:3000 | used in tracking links |
/// | MAIL_API_URL / MAIL_API_KEY | unset | mail disabled when unset |
/// | MAIL_FROM / ADMIN_EMAIL | see defaults | outbound addresses |
/// | JWT_SECRET / JWT_EXPIRATION_MINUTES | generated / 1440 | auth tokens |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Data directory for the embedded store and log files
    pub data_dir: String,
    /// Durable or ephemeral storage
    pub storage_mode: StorageMode,
    /// JWT auth configuration
    pub jwt: JwtConfig,
    /// Running environment: development | staging | production
    pub environment: String,
    /// Base URL customers see in emails (tracking links)
    pub public_base_url: String,
    /// Outbound mail transport
    pub mail: MailConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            storage_mode: StorageMode::from_env(),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            mail: MailConfig::from_env(),
        }
    }

    /// Path of the embedded database under the data directory.
    pub fn database_path(&self) -> String {
        format!("{}/savannah.db", self.data_dir)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
