//! Newsletter repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::NewsletterLead;
use crate::utils::now_millis;

const TABLE: &str = "newsletter_lead";

#[derive(Clone)]
pub struct NewsletterRepository {
    base: BaseRepository,
}

impl NewsletterRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Subscribe an email. Duplicates are a conflict: checked up front for a
    /// clean error, with the unique index on `email` as the backstop against
    /// racing subscriptions.
    pub async fn add(&self, email: &str) -> RepoResult<NewsletterLead> {
        if self.find_by_email(email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' is already subscribed",
                email
            )));
        }

        let lead = NewsletterLead {
            id: None,
            email: email.to_string(),
            created_at: now_millis(),
        };

        match self.base.db().create(TABLE).content(lead).await {
            Ok(Some(created)) => Ok(created),
            Ok(None) => Err(RepoError::Database(
                "Failed to create newsletter lead".to_string(),
            )),
            // Unique index violation from a concurrent subscribe
            Err(e) if e.to_string().contains("newsletter_lead_email") => Err(
                RepoError::Duplicate(format!("Email '{}' is already subscribed", email)),
            ),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<NewsletterLead>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM newsletter_lead WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let leads: Vec<NewsletterLead> = result.take(0)?;
        Ok(leads.into_iter().next())
    }

    pub async fn find_all(&self) -> RepoResult<Vec<NewsletterLead>> {
        let leads: Vec<NewsletterLead> = self
            .base
            .db()
            .query("SELECT * FROM newsletter_lead ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(leads)
    }
}
