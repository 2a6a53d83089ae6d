//! Wire DTOs for the product API and the assistant service.
//!
//! DESIGN
//! ======
//! Product payloads stay untyped (`RawRecord`) at this boundary because the
//! backend forwards whatever columns its dataset carries. `products::normalize`
//! owns the mapping into the canonical `Product`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A product record exactly as received from the API or a CSV row.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// ERROR
// =============================================================================

/// Failures inside the ingestion layer. None of these escape `ProductService`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    /// The request never produced a response.
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed: {0}")]
    Status(u16),

    /// The response body was not the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The bundled dataset could not be loaded or parsed.
    #[error("csv parse failed: {0}")]
    Csv(String),

    /// No product carries the requested identifier.
    #[error("product not found: {0}")]
    NotFound(String),
}

// =============================================================================
// PRODUCT API
// =============================================================================

/// `GET /api/products` response body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductsEnvelope {
    #[serde(default)]
    pub products: Vec<RawRecord>,
}

/// Body for `POST /api/predict` and `POST /api/recommend`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductQuery {
    pub title: String,
    pub price: f64,
    #[serde(rename = "categoryName")]
    pub category_name: String,
}

/// `POST /api/predict` response body. `eco_label` is a number or a boolean.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub eco_label: Option<serde_json::Value>,
    #[serde(default)]
    pub recommendations: Option<Vec<RawRecord>>,
}

/// `POST /api/recommend` response body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommendations: Option<Vec<RawRecord>>,
}

// =============================================================================
// ASSISTANT
// =============================================================================

/// Product attributes forwarded with a chat turn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductContext {
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "ecoLabel")]
    pub eco_label: u8,
}

/// `POST /api/ai/chat` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_context: Option<ProductContext>,
}

/// `POST /api/ai/chat` response body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default)]
    pub recommendations: Vec<RawRecord>,
    #[serde(default)]
    pub debug: ChatDebug,
}

/// Diagnostics the assistant attaches to every answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatDebug {
    #[serde(default)]
    pub product_detected: Option<bool>,
    #[serde(default)]
    pub recommendations_count: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}
