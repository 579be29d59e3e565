//! Menu item repository

use std::collections::HashSet;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::utils::now_millis;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items grouped the way the storefront renders them.
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY category, name")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find one item by id (bare key or `menu_item:key`).
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let key = id.strip_prefix("menu_item:").unwrap_or(id);
        let item: Option<MenuItem> = self.base.db().select((TABLE, key)).await?;
        Ok(item)
    }

    /// Which of the submitted ids actually exist in the catalog. Used by
    /// checkout to reject unknown items.
    pub async fn existing_ids(&self, ids: &[String]) -> RepoResult<HashSet<String>> {
        let record_ids: Vec<RecordId> = ids
            .iter()
            .filter_map(|id| {
                let key = id.strip_prefix("menu_item:").unwrap_or(id);
                if key.is_empty() {
                    None
                } else {
                    Some(RecordId::from_table_key(TABLE, key))
                }
            })
            .collect();

        let mut result = self
            .base
            .db()
            .query("SELECT VALUE <string>id FROM menu_item WHERE id INSIDE $ids")
            .bind(("ids", record_ids))
            .await?;
        let found: Vec<String> = result.take(0)?;

        Ok(found.into_iter().collect())
    }

    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let item = MenuItem {
            id: None,
            name: data.name,
            price: data.price,
            original_price: data.original_price,
            description: data.description,
            category: data.category,
            tag: data.tag,
            image: data.image,
            is_available: true,
            created_at: now_millis(),
        };

        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let key = id.strip_prefix("menu_item:").unwrap_or(id);
        self.find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))?;

        let record_id = RecordId::from_table_key(TABLE, key);
        let updated: Option<MenuItem> = self.base.db().update(record_id).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = id.strip_prefix("menu_item:").unwrap_or(id);
        let deleted: Option<MenuItem> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }

    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("RETURN count((SELECT VALUE id FROM menu_item))")
            .await?;
        let count: Option<i64> = result.take(0)?;
        Ok(count.unwrap_or(0))
    }

    /// Bulk insert used by the startup seed.
    pub async fn seed(&self, items: Vec<MenuItem>) -> RepoResult<()> {
        for item in items {
            let _: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        }
        Ok(())
    }
}
