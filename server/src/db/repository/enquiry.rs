//! Enquiry repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Enquiry, EnquiryCreate};
use crate::utils::now_millis;

const TABLE: &str = "enquiry";

#[derive(Clone)]
pub struct EnquiryRepository {
    base: BaseRepository,
}

impl EnquiryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, data: EnquiryCreate) -> RepoResult<Enquiry> {
        let enquiry = Enquiry {
            id: None,
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            created_at: now_millis(),
        };

        let created: Option<Enquiry> = self.base.db().create(TABLE).content(enquiry).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create enquiry".to_string()))
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Enquiry>> {
        let enquiries: Vec<Enquiry> = self
            .base
            .db()
            .query("SELECT * FROM enquiry ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(enquiries)
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = id.strip_prefix("enquiry:").unwrap_or(id);
        let deleted: Option<Enquiry> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}
