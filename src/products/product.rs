//! Canonical product record shared by every page and service.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use serde::{Deserialize, Serialize};

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Sustainability classification attached to every product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum EcoLabel {
    #[default]
    Harmful,
    Moderate,
    EcoFriendly,
}

impl EcoLabel {
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Harmful),
            1 => Some(Self::Moderate),
            2 => Some(Self::EcoFriendly),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Harmful => 0,
            Self::Moderate => 1,
            Self::EcoFriendly => 2,
        }
    }

    /// Human-readable badge text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Harmful => "Harmful",
            Self::Moderate => "Moderate",
            Self::EcoFriendly => "Eco-friendly",
        }
    }

    /// Match a textual label such as `"eco-friendly"` or `"moderate"`.
    pub fn from_name(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "harmful" => Some(Self::Harmful),
            "moderate" => Some(Self::Moderate),
            "eco-friendly" | "ecofriendly" => Some(Self::EcoFriendly),
            _ => None,
        }
    }
}

impl From<EcoLabel> for u8 {
    fn from(label: EcoLabel) -> Self {
        label.code()
    }
}

impl TryFrom<u8> for EcoLabel {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unknown eco label: {code}"))
    }
}

/// The backend/CSV-agnostic product every UI path operates on.
///
/// Field names on the wire keep the dataset's casing so records can be passed
/// back to the API unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub asin: String,
    pub title: String,
    #[serde(rename = "imgUrl")]
    pub img_url: String,
    #[serde(rename = "productURL")]
    pub product_url: String,
    /// Rating in `[0, 5]`.
    pub stars: f64,
    pub reviews: u64,
    pub price: f64,
    #[serde(rename = "isBestSeller")]
    pub is_best_seller: bool,
    #[serde(rename = "boughtInLastMonth")]
    pub bought_in_last_month: u64,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "EcoLabel")]
    pub eco_label: EcoLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Payload for the predict/recommend endpoints.
    pub fn query(&self) -> crate::net::types::ProductQuery {
        crate::net::types::ProductQuery {
            title: self.title.clone(),
            price: self.price,
            category_name: self.category_name.clone(),
        }
    }

    /// Context forwarded to the assistant with a chat turn.
    pub fn chat_context(&self) -> crate::net::types::ProductContext {
        crate::net::types::ProductContext {
            title: self.title.clone(),
            price: self.price,
            category: self.category_name.clone(),
            eco_label: self.eco_label.code(),
        }
    }
}

/// Result of a sustainability prediction for one product view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EcoPrediction {
    pub eco_label: EcoLabel,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}
