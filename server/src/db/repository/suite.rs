//! Suite repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::Suite;

const TABLE: &str = "suite";

#[derive(Clone)]
pub struct SuiteRepository {
    base: BaseRepository,
}

impl SuiteRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Suite>> {
        let suites: Vec<Suite> = self
            .base
            .db()
            .query("SELECT * FROM suite ORDER BY price_per_night")
            .await?
            .take(0)?;
        Ok(suites)
    }

    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("RETURN count((SELECT VALUE id FROM suite))")
            .await?;
        let count: Option<i64> = result.take(0)?;
        Ok(count.unwrap_or(0))
    }

    /// Bulk insert used by the startup seed.
    pub async fn seed(&self, suites: Vec<Suite>) -> RepoResult<()> {
        for suite in suites {
            let _: Option<Suite> = self.base.db().create(TABLE).content(suite).await?;
        }
        Ok(())
    }
}
