use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::{Config, StorageMode};
use crate::db::{DbService, seed};
use crate::notify::Mailer;
use crate::utils::AppError;

/// Server state - shared handle to every service
///
/// Cloning is shallow: the database handle and the Arc-wrapped services are
/// reference-counted, so handlers can take the whole state by value.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB, disk or memory engine)
    pub db: Surreal<Db>,
    /// JWT auth service
    pub jwt_service: Arc<JwtService>,
    /// Outbound mail transport
    pub mailer: Arc<Mailer>,
}

impl ServerState {
    pub fn new(
        config: Config,
        db: Surreal<Db>,
        jwt_service: Arc<JwtService>,
        mailer: Arc<Mailer>,
    ) -> Self {
        Self {
            config,
            db,
            jwt_service,
            mailer,
        }
    }

    /// Initialize everything the server needs, in order:
    ///
    /// 1. the storage engine (disk or memory, per configuration),
    /// 2. schema indexes and seed data,
    /// 3. the JWT and mail services.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = match config.storage_mode {
            StorageMode::Disk => {
                std::fs::create_dir_all(&config.data_dir).map_err(|e| {
                    AppError::internal(format!("Failed to create data dir: {e}"))
                })?;
                DbService::new(&config.database_path()).await?
            }
            StorageMode::Memory => {
                tracing::warn!("STORAGE_MODE=memory: all data is lost on shutdown");
                DbService::new_in_memory().await?
            }
        };
        let db = db_service.db;

        seed::seed_if_empty(&db).await?;

        let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));
        let mailer = Arc::new(Mailer::from_config(&config.mail));

        Ok(Self::new(config.clone(), db, jwt_service, mailer))
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn get_mailer(&self) -> Arc<Mailer> {
        self.mailer.clone()
    }

    /// Tracking URL customers receive in status emails.
    pub fn tracking_url(&self, order_id: &str) -> String {
        format!("{}/track/{}", self.config.public_base_url, order_id)
    }
}
