//! Remote waitlist table access.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder, StatusCode};
use shared::{
    domain::{Submission, WaitlistEntry},
    error::StoreErrorBody,
    protocol::{EmailFilter, API_KEY_HEADER, PREFER_HEADER, PREFER_RETURN_MINIMAL},
};
use tracing::debug;

use crate::{config::StoreConfig, error::StoreError};

#[async_trait]
pub trait WaitlistStore: Send + Sync {
    /// Rows whose `email` column equals `email` exactly.
    async fn find_by_email(&self, email: &str) -> Result<Vec<WaitlistEntry>, StoreError>;
    async fn insert(&self, submission: &Submission) -> Result<(), StoreError>;
}

/// Talks to a PostgREST-style table endpoint with key-based auth.
pub struct RestWaitlistStore {
    http: Client,
    table_url: String,
    api_key: String,
}

impl RestWaitlistStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: &StoreConfig) -> Self {
        Self {
            http,
            table_url: config.table_url().to_string(),
            api_key: config.api_key().to_string(),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(API_KEY_HEADER, self.api_key.as_str())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
    }
}

#[async_trait]
impl WaitlistStore for RestWaitlistStore {
    async fn find_by_email(&self, email: &str) -> Result<Vec<WaitlistEntry>, StoreError> {
        let response = self
            .authorized(self.http.get(&self.table_url))
            .query(&EmailFilter::exact(email))
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(rejected(status, &body));
        }

        // Only the row count decides a duplicate; row contents are best effort.
        let rows: Vec<serde_json::Value> = serde_json::from_slice(&body)?;
        Ok(rows.iter().map(WaitlistEntry::from_row).collect())
    }

    async fn insert(&self, submission: &Submission) -> Result<(), StoreError> {
        let response = self
            .authorized(self.http.post(&self.table_url))
            .header(PREFER_HEADER, PREFER_RETURN_MINIMAL)
            .json(submission)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(rejected(status, &body))
    }
}

fn rejected(status: StatusCode, body: &[u8]) -> StoreError {
    let parsed = StoreErrorBody::parse(body).unwrap_or_default();
    debug!(
        status = status.as_u16(),
        code = parsed.code.as_deref().unwrap_or("-"),
        details = parsed.details.as_deref().unwrap_or("-"),
        hint = parsed.hint.as_deref().unwrap_or("-"),
        "store rejected request"
    );
    StoreError::Status {
        status: status.as_u16(),
        message: parsed.message,
    }
}
