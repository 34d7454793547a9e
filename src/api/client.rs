//! REST client for the trip persistence backend.
//!
//! The backend is a plain key/value store with two collections, `trips` and
//! `templates`, exposed as `GET /api/{collection}` (list, newest first) and
//! `POST /api/{collection}` (create, returns the new row id). There is no
//! authentication and no retry logic; a failed request is terminal for that
//! attempt.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::models::{Collection, NewRecord, SavedRecord};

use super::ApiError;

/// HTTP request timeout in seconds.
/// Itinerary blobs are small; 30s covers a slow local backend comfortably.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct CreateResponse {
    #[serde(default)]
    status: String,
    id: i64,
}

/// Store client. Clone is cheap - reqwest::Client uses Arc internally for
/// connection pooling.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/api/{}", self.base_url, collection.path())
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    /// Fetch all saved records in a collection, ordered newest first by the
    /// backend.
    pub async fn list(&self, collection: Collection) -> Result<Vec<SavedRecord>> {
        let url = self.collection_url(collection);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {} list", collection))?;

        let response = Self::check_response(response).await?;

        let records: Vec<SavedRecord> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} list response", collection))?;

        debug!(collection = %collection, count = records.len(), "fetched saved records");
        Ok(records)
    }

    /// Save a record into a collection and return the new row id.
    pub async fn create(&self, collection: Collection, record: &NewRecord) -> Result<i64> {
        let url = self.collection_url(collection);

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .with_context(|| format!("Failed to save to {}", collection))?;

        let response = Self::check_response(response).await?;

        let created: CreateResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} create response", collection))?;

        debug!(collection = %collection, id = created.id, status = %created.status, "record saved");
        Ok(created.id)
    }
}
