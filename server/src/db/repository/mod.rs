//! Repository module
//!
//! CRUD access to the SurrealDB tables. Order items hang off orders through
//! `has_item` graph edges; everything else is flat tables.

pub mod blog;
pub mod enquiry;
pub mod menu_item;
pub mod newsletter;
pub mod order;
pub mod reservation;
pub mod site_settings;
pub mod suite;
pub mod user;

// Re-exports
pub use blog::BlogRepository;
pub use enquiry::EnquiryRepository;
pub use menu_item::MenuItemRepository;
pub use newsletter::NewsletterRepository;
pub use order::OrderRepository;
pub use reservation::ReservationRepository;
pub use site_settings::SiteSettingsRepository;
pub use suite::SuiteRepository;
pub use user::UserRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
