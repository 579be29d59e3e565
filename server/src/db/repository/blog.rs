//! Blog repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Blog, BlogCreate, BlogUpdate};
use crate::utils::now_millis;

const TABLE: &str = "blog";

#[derive(Clone)]
pub struct BlogRepository {
    base: BaseRepository,
}

impl BlogRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Blog>> {
        let blogs: Vec<Blog> = self
            .base
            .db()
            .query("SELECT * FROM blog ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(blogs)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Blog>> {
        let key = id.strip_prefix("blog:").unwrap_or(id);
        let blog: Option<Blog> = self.base.db().select((TABLE, key)).await?;
        Ok(blog)
    }

    pub async fn create(&self, data: BlogCreate) -> RepoResult<Blog> {
        let blog = Blog {
            id: None,
            title: data.title,
            content: data.content,
            author: data.author,
            image: data.image,
            category: data.category,
            created_at: now_millis(),
        };

        let created: Option<Blog> = self.base.db().create(TABLE).content(blog).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create blog".to_string()))
    }

    pub async fn update(&self, id: &str, data: BlogUpdate) -> RepoResult<Blog> {
        let key = id.strip_prefix("blog:").unwrap_or(id);
        self.find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Blog {} not found", id)))?;

        let record_id = RecordId::from_table_key(TABLE, key);
        let updated: Option<Blog> = self.base.db().update(record_id).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Blog {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = id.strip_prefix("blog:").unwrap_or(id);
        let deleted: Option<Blog> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}
