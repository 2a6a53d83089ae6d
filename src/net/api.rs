//! REST calls against the product API and the assistant service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call reports a network failure, which the
//! ingestion pipeline turns into its usual fallbacks.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, IngestError>` instead of panicking; callers in
//! `products` and `state` decide how each failure degrades.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatRequest, ChatResponse, IngestError, PredictResponse, ProductQuery, RawRecord, RecommendResponse};
use crate::config::ApiConfig;

/// Data sources the ingestion pipeline and eco prediction depend on.
#[allow(async_fn_in_trait)]
pub trait CatalogBackend {
    /// Fetch every product record from the remote API.
    async fn fetch_products(&self) -> Result<Vec<RawRecord>, IngestError>;

    /// Fetch the bundled CSV dataset as text.
    async fn fetch_products_csv(&self) -> Result<String, IngestError>;

    /// Ask the model for an eco label.
    async fn predict(&self, query: &ProductQuery) -> Result<PredictResponse, IngestError>;

    /// Ask for greener alternatives to a product.
    async fn recommend(&self, query: &ProductQuery) -> Result<RecommendResponse, IngestError>;
}

/// `CatalogBackend` over HTTP using the build-time `ApiConfig`.
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn ensure_success(ok: bool, status: u16) -> Result<(), IngestError> {
    if ok { Ok(()) } else { Err(IngestError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn network_error(err: impl std::fmt::Display) -> IngestError {
    IngestError::Network(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn malformed_error(err: impl std::fmt::Display) -> IngestError {
    IngestError::MalformedResponse(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> IngestError {
    IngestError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, IngestError> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(network_error)?;
    ensure_success(resp.ok(), resp.status())?;
    resp.json::<T>().await.map_err(malformed_error)
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, IngestError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(malformed_error)?
        .send()
        .await
        .map_err(network_error)?;
    ensure_success(resp.ok(), resp.status())?;
    resp.json::<T>().await.map_err(malformed_error)
}

impl CatalogBackend for HttpBackend {
    async fn fetch_products(&self) -> Result<Vec<RawRecord>, IngestError> {
        #[cfg(feature = "hydrate")]
        {
            let envelope: super::types::ProductsEnvelope = get_json(&self.config.products_url()).await?;
            Ok(envelope.products)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable())
        }
    }

    async fn fetch_products_csv(&self) -> Result<String, IngestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.products_csv_url)
                .send()
                .await
                .map_err(|e| IngestError::Csv(e.to_string()))?;
            if !resp.ok() {
                return Err(IngestError::Csv(format!("dataset request failed: {}", resp.status())));
            }
            resp.text().await.map_err(|e| IngestError::Csv(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(IngestError::Csv("not available on server".to_owned()))
        }
    }

    async fn predict(&self, query: &ProductQuery) -> Result<PredictResponse, IngestError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.config.predict_url(), query).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(unavailable())
        }
    }

    async fn recommend(&self, query: &ProductQuery) -> Result<RecommendResponse, IngestError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.config.recommend_url(), query).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(unavailable())
        }
    }
}

/// Send one chat turn to `POST /api/ai/chat` on the assistant service.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not successful, or
/// the body is not a chat response.
pub async fn send_chat(config: &ApiConfig, request: &ChatRequest) -> Result<ChatResponse, IngestError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.chat_url(), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(unavailable())
    }
}

/// Probe `GET /api/health`.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or unhealthy.
pub async fn check_health(config: &ApiConfig) -> Result<(), IngestError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.health_url())
            .send()
            .await
            .map_err(network_error)?;
        ensure_success(resp.ok(), resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(unavailable())
    }
}
