//! User repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::User;
use crate::utils::now_millis;

const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let username_owned = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE username = $username LIMIT 1")
            .bind(("username", username_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Register a new user. `hash_pass` must already be an argon2 hash.
    pub async fn create(&self, username: &str, hash_pass: &str, is_admin: bool) -> RepoResult<User> {
        if self.find_by_username(username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Username '{}' already exists",
                username
            )));
        }

        let user = User {
            id: None,
            username: username.to_string(),
            hash_pass: hash_pass.to_string(),
            is_admin,
            loyalty_points: 0,
            created_at: now_millis(),
        };

        match self.base.db().create(TABLE).content(user).await {
            Ok(Some(created)) => Ok(created),
            Ok(None) => Err(RepoError::Database("Failed to create user".to_string())),
            // Unique index violation from a concurrent registration
            Err(e) if e.to_string().contains("user_username") => Err(RepoError::Duplicate(
                format!("Username '{}' already exists", username),
            )),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("RETURN count((SELECT VALUE id FROM user))")
            .await?;
        let count: Option<i64> = result.take(0)?;
        Ok(count.unwrap_or(0))
    }

    /// Best-effort loyalty accrual, keyed by username (checkout matches the
    /// customer email against it). Missing user is not an error.
    pub async fn add_loyalty_points(&self, username: &str, points: i64) -> RepoResult<bool> {
        let username_owned = username.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE user SET loyalty_points += $points WHERE username = $username RETURN AFTER",
            )
            .bind(("points", points))
            .bind(("username", username_owned))
            .await?;
        let updated: Vec<User> = result.take(0)?;
        Ok(!updated.is_empty())
    }
}
