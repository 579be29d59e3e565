//! Mail transport
//!
//! Thin client for a transactional-mail HTTP API: one `send(to, subject,
//! html)` call, JSON body, bearer auth. When the API url or key is missing
//! the mailer reports [`MailError::NotConfigured`] and callers decide
//! whether that is a skip (detached notifications) or a failure (the
//! explicit admin message endpoint).

use serde::Serialize;
use thiserror::Error;

use crate::core::MailConfig;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail transport not configured")]
    NotConfigured,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("mail API rejected the message (status {0})")]
    Api(u16),
}

#[derive(Serialize)]
struct OutboundMessage<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

pub struct Mailer {
    client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    from: String,
    admin_email: Option<String>,
}

impl Mailer {
    pub fn from_config(config: &MailConfig) -> Self {
        if config.api_url.is_none() || config.api_key.is_none() {
            tracing::warn!("mail transport not configured, outbound email is disabled");
        }
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from: config.from.clone(),
            admin_email: config.admin_email.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_url.is_some() && self.api_key.is_some()
    }

    /// Where admin alerts go, when configured.
    pub fn admin_email(&self) -> Option<&str> {
        self.admin_email.as_deref()
    }

    /// Send one message. The caller owns the decision of what a failure
    /// means - this never retries.
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        let (Some(api_url), Some(api_key)) = (self.api_url.as_deref(), self.api_key.as_deref())
        else {
            return Err(MailError::NotConfigured);
        };

        let message = OutboundMessage {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        let response = self
            .client
            .post(api_url)
            .bearer_auth(api_key)
            .json(&message)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MailError::Api(response.status().as_u16()));
        }
        Ok(())
    }
}
