//! HTTP client for the events API

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Event, NewEvent};

pub mod board;

pub use board::{CategoryFilter, EventBoard};

pub const DEFAULT_API_URL: &str = "http://localhost:5001";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("{0}")]
    InvalidInput(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct EventsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EventsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Uses `SCHEDULAI_API_URL`, falling back to the local dev server.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SCHEDULAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /events
    pub async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/events", self.base_url))
            .send()
            .await?;

        Ok(check(resp).await?.json().await?)
    }

    /// POST /events
    pub async fn create_event(&self, new_event: &NewEvent) -> Result<Event, ClientError> {
        if !new_event.has_required_fields() {
            return Err(ClientError::InvalidInput(
                "Please fill in the Title, Date, and Time fields.".to_string(),
            ));
        }

        let resp = self
            .http
            .post(format!("{}/events", self.base_url))
            .json(new_event)
            .send()
            .await?;

        Ok(check(resp).await?.json().await?)
    }

    /// PUT /events/:id
    pub async fn toggle_archive(&self, id: u64) -> Result<Event, ClientError> {
        let resp = self
            .http
            .put(format!("{}/events/{}", self.base_url, id))
            .send()
            .await?;

        Ok(check(resp).await?.json().await?)
    }

    /// DELETE /events/:id
    pub async fn delete_event(&self, id: u64) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(format!("{}/events/{}", self.base_url, id))
            .send()
            .await?;

        check(resp).await?;
        Ok(())
    }
}

async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string(),
    };
    Err(ClientError::Api { status, message })
}
