use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};
use reqwest::header::CONTENT_TYPE;
use scraper_core::ScrapeResponse;
use serde::Serialize;
use thiserror::Error;

/// Why a scrape did not produce a response.
///
/// `Display` is the user-facing message shown in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    #[error("API URL not configured. Set SCRAPER_API_URL or save a backend URL.")]
    NotConfigured,
    #[error("Scrape failed: {status} - {body}")]
    Transport { status: u16, body: String },
    #[error("Invalid response format")]
    Validation,
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Default)]
pub struct ClientSettings {
    /// `None` leaves the connection attempt unbounded.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
}

#[async_trait::async_trait]
pub trait ScrapeApi: Send + Sync {
    /// Posts `url` to `{base_url}/scrape`.
    async fn scrape(&self, base_url: &str, url: &str) -> Result<ScrapeResponse, ScrapeError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestScrapeClient {
    settings: ClientSettings,
}

impl ReqwestScrapeClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ScrapeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| ScrapeError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl ScrapeApi for ReqwestScrapeClient {
    async fn scrape(&self, base_url: &str, url: &str) -> Result<ScrapeResponse, ScrapeError> {
        if base_url.is_empty() {
            return Err(ScrapeError::NotConfigured);
        }

        let endpoint = format!("{base_url}/scrape");
        let body = serde_json::to_string(&ScrapeRequest { url })
            .map_err(|err| ScrapeError::Decode(err.to_string()))?;
        let client = self.build_client()?;

        engine_debug!("POST {} for {}", endpoint, url);
        let response = client
            .post(&endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| ScrapeError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            engine_warn!("Scrape backend answered {} for {}", status.as_u16(), url);
            return Err(ScrapeError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ScrapeError::Network(err.to_string()))?;
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|err| ScrapeError::Decode(err.to_string()))?;

        ScrapeResponse::from_value(value).ok_or(ScrapeError::Validation)
    }
}
