//! Reservation repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Reservation, ReservationCreate};
use crate::utils::now_millis;

const TABLE: &str = "reservation";

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        let reservation = Reservation {
            id: None,
            name: data.name,
            email: data.email,
            date: data.date,
            time: data.time,
            guests: data.guests,
            requests: data.requests,
            created_at: now_millis(),
        };

        let created: Option<Reservation> =
            self.base.db().create(TABLE).content(reservation).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// All reservations, newest first (admin dashboard).
    pub async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(reservations)
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = id.strip_prefix("reservation:").unwrap_or(id);
        let deleted: Option<Reservation> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}
