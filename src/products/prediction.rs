//! Eco-label prediction for the product detail view.
//!
//! A failed prediction degrades to the label embedded in the product record
//! at a lower confidence, and still tries to surface greener alternatives.

#[cfg(test)]
#[path = "prediction_test.rs"]
mod prediction_test;

use serde_json::Value;

use super::normalize::normalize_records;
use super::product::{EcoLabel, EcoPrediction, Product};
use crate::net::api::CatalogBackend;

pub const PREDICTED_CONFIDENCE: f64 = 0.9;
pub const FALLBACK_CONFIDENCE: f64 = 0.85;

/// Prediction plus any alternatives the backend suggested.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionOutcome {
    pub prediction: EcoPrediction,
    pub recommendations: Vec<Product>,
}

/// Interpret the predict endpoint's `eco_label`, a code or a boolean.
pub fn label_from_response(value: Option<&Value>) -> EcoLabel {
    match value {
        Some(Value::Bool(true)) => EcoLabel::EcoFriendly,
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|code| u8::try_from(code).ok())
            .and_then(EcoLabel::from_code)
            .unwrap_or_default(),
        _ => EcoLabel::Harmful,
    }
}

/// Predict the eco label for `product`, degrading instead of failing.
pub async fn predict_eco_label<B: CatalogBackend>(backend: &B, product: &Product) -> PredictionOutcome {
    let query = product.query();
    match backend.predict(&query).await {
        Ok(response) => PredictionOutcome {
            prediction: EcoPrediction {
                eco_label: label_from_response(response.eco_label.as_ref()),
                confidence: PREDICTED_CONFIDENCE,
            },
            recommendations: response.recommendations.as_deref().map(normalize_records).unwrap_or_default(),
        },
        Err(err) => {
            log::warn!("eco prediction failed ({err}), using dataset label");
            let eco_label = product.eco_label;
            let recommendations = if eco_label == EcoLabel::EcoFriendly {
                Vec::new()
            } else {
                match backend.recommend(&query).await {
                    Ok(response) => response.recommendations.as_deref().map(normalize_records).unwrap_or_default(),
                    Err(err) => {
                        log::warn!("recommendations unavailable: {err}");
                        Vec::new()
                    }
                }
            };
            PredictionOutcome {
                prediction: EcoPrediction { eco_label, confidence: FALLBACK_CONFIDENCE },
                recommendations,
            }
        }
    }
}
