use gloo_net::http::Request;
use leptos::logging::log;
use thiserror::Error;

use crate::models::review::{AnalysisResult, ReviewRecord, ReviewRequest};

/// Errors from the analysis endpoint. Every variant is transient as far as the
/// submission flow is concerned: network failures, non-2xx statuses and
/// malformed payloads all go through the same retry path.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Capability the submission flow needs from the outside world. The production
/// implementation speaks HTTP; tests script it.
pub trait AnalysisBackend {
    async fn analyze(&self, request: &ReviewRequest) -> Result<AnalysisResult, ApiError>;
    async fn recent_reviews(&self) -> Result<Vec<ReviewRecord>, ApiError>;
}

/// HTTP client for the external sentiment-analysis service.
pub struct HttpBackend {
    base: String,
}

impl HttpBackend {
    /// Same-origin endpoints, as served alongside the page.
    pub fn new() -> Self {
        Self::with_base("")
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, request: &ReviewRequest) -> Result<AnalysisResult, ApiError> {
        log!(
            "[API] POST /analyze payload: {}",
            serde_json::to_string(request).unwrap_or_default()
        );
        let response = Request::post(&self.url("/analyze"))
            .json(request)?
            .send()
            .await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json::<AnalysisResult>().await?)
    }

    async fn recent_reviews(&self) -> Result<Vec<ReviewRecord>, ApiError> {
        let response = Request::get(&self.url("/reviews")).send().await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        let records = response.json::<Vec<ReviewRecord>>().await?;
        log!("[API] GET /reviews returned {} records", records.len());
        Ok(records)
    }
}
