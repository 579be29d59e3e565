//! Database module
//!
//! Embedded SurrealDB storage. The engine behind [`DbService`] is selected
//! at startup: RocksDB under the data directory for durable deployments, the
//! in-memory engine for the ephemeral variant. Both expose the same
//! `Surreal<Db>` handle, so repositories never care which one is running.

pub mod models;
pub mod repository;
pub mod seed;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "savannah";
const DATABASE: &str = "main";

/// Database service - owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the durable RocksDB-backed store.
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::prepare(&db).await?;
        tracing::info!(path = %db_path, "Database connection established (RocksDB)");
        Ok(Self { db })
    }

    /// Open the ephemeral in-process store. Everything vanishes on drop.
    pub async fn new_in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::prepare(&db).await?;
        tracing::info!("Database connection established (in-memory)");
        Ok(Self { db })
    }

    async fn prepare(db: &Surreal<Db>) -> Result<(), AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(db).await?;
        Ok(())
    }
}

/// Uniqueness constraints the application relies on. Everything else is
/// schemaless; statements are idempotent so this runs on every startup.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE INDEX IF NOT EXISTS newsletter_lead_email ON TABLE newsletter_lead FIELDS email UNIQUE;
        DEFINE INDEX IF NOT EXISTS user_username ON TABLE user FIELDS username UNIQUE;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
    Ok(())
}
