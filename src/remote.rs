use crate::config::Config;
use crate::dates::{self, DayRange};
use crate::models::{Adjustment, MethodFilter, Patient};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use thiserror::Error;

/// Failure modes of the remote table store. Kept distinct from an empty
/// result set so callers can tell "nothing scheduled" from "could not ask".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("remote returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read/update surface of the remote store. The store is ground truth: no
/// result is cached across calls, and every mutation is followed by a
/// re-read rather than a local edit.
#[async_trait]
pub trait AdjustmentStore: Send + Sync {
    /// Adjustments whose `scheduled_at` lies within `range`, ascending by
    /// `scheduled_at`, optionally narrowed by completion flag and method.
    async fn adjustments(
        &self,
        range: &DayRange,
        completed: Option<bool>,
        filter: MethodFilter,
    ) -> Result<Vec<Adjustment>, StoreError>;

    /// Most recently created patient row, if any.
    async fn latest_patient(&self) -> Result<Option<Patient>, StoreError>;

    /// Flip `completed` to true on one row. Idempotent; flipping an already
    /// completed row is a no-op on the remote side.
    async fn mark_completed(&self, id: i64) -> Result<(), StoreError>;
}

/// HTTP implementation speaking PostgREST filter syntax
/// (`column=eq.value`, `column=gte.bound`, `order=column.asc`).
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RemoteStore {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.remote_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.base_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if self.api_key.is_empty() {
            request
        } else {
            request
                .header("apikey", &self.api_key)
                .bearer_auth(&self.api_key)
        }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let request = self.client.get(self.table_url(table)).query(query);
        let response = self.authorize(request).send().await?;
        let body = check_status(response).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Status { status, body })
    }
}

#[async_trait]
impl AdjustmentStore for RemoteStore {
    async fn adjustments(
        &self,
        range: &DayRange,
        completed: Option<bool>,
        filter: MethodFilter,
    ) -> Result<Vec<Adjustment>, StoreError> {
        let mut query = Vec::with_capacity(5);
        if let Some(done) = completed {
            query.push(("completed", format!("eq.{done}")));
        }
        query.push(("scheduled_at", format!("gte.{}", dates::format_bound(range.start))));
        query.push(("scheduled_at", format!("lt.{}", dates::format_bound(range.end))));
        if let Some(method) = filter.method() {
            query.push(("method", format!("eq.{method}")));
        }
        query.push(("order", "scheduled_at.asc".to_string()));

        self.fetch("adjustments", &query).await
    }

    async fn latest_patient(&self) -> Result<Option<Patient>, StoreError> {
        let query = [
            ("order", "created_at.desc".to_string()),
            ("limit", "1".to_string()),
        ];
        let rows: Vec<Patient> = self.fetch("patients", &query).await?;
        Ok(rows.into_iter().next())
    }

    async fn mark_completed(&self, id: i64) -> Result<(), StoreError> {
        let request = self
            .client
            .patch(self.table_url("adjustments"))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({ "completed": true }));
        let response = self.authorize(request).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
