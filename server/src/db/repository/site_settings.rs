//! Site settings repository (singleton)

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{SiteSettings, SiteSettingsUpdate};

const TABLE: &str = "site_settings";
const SINGLETON_ID: &str = "main";

#[derive(Clone)]
pub struct SiteSettingsRepository {
    base: BaseRepository,
}

impl SiteSettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Get the singleton settings row, creating it with defaults on first
    /// access.
    pub async fn get_or_create(&self) -> RepoResult<SiteSettings> {
        if let Some(settings) = self.get().await? {
            return Ok(settings);
        }

        let settings = SiteSettings::default();
        let created: Option<SiteSettings> = self
            .base
            .db()
            .create((TABLE, SINGLETON_ID))
            .content(settings)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create site settings".to_string()))
    }

    pub async fn get(&self) -> RepoResult<Option<SiteSettings>> {
        let settings: Option<SiteSettings> =
            self.base.db().select((TABLE, SINGLETON_ID)).await?;
        Ok(settings)
    }

    pub async fn update(&self, data: SiteSettingsUpdate) -> RepoResult<SiteSettings> {
        // Ensure the singleton exists before merging
        self.get_or_create().await?;

        let singleton_id = RecordId::from_table_key(TABLE, SINGLETON_ID);
        let updated: Option<SiteSettings> =
            self.base.db().update(singleton_id).merge(data).await?;
        updated.ok_or_else(|| RepoError::Database("Failed to update site settings".to_string()))
    }
}
