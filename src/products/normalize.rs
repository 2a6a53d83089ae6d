//! Tolerant mapping from heterogeneous raw records to canonical `Product`s.
//!
//! DESIGN
//! ======
//! Each canonical field owns an ordered alias list in `FIELD_ALIASES`; the
//! first alias carrying a present value wins and is coerced into the field's
//! type. Supporting a new source schema means appending aliases, not adding
//! branches.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use std::collections::HashSet;

use serde_json::Value;

use super::product::{EcoLabel, Product, UNCATEGORIZED};
use crate::net::types::RawRecord;

/// Canonical product fields resolved through the alias table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Asin,
    Title,
    ImgUrl,
    ProductUrl,
    Stars,
    Reviews,
    Price,
    IsBestSeller,
    BoughtInLastMonth,
    CategoryName,
    EcoLabel,
    Description,
}

/// Candidate source keys per field, probed in order.
pub const FIELD_ALIASES: &[(Field, &[&str])] = &[
    (Field::Asin, &["asin", "ASIN", "id", "Id"]),
    (Field::Title, &["title", "Name", "productTitle"]),
    (Field::ImgUrl, &["imgUrl", "imageURL", "image", "img"]),
    (Field::ProductUrl, &["productURL", "url", "link", "productUrl"]),
    (Field::Stars, &["stars", "rating", "starsOutOf5"]),
    (Field::Reviews, &["reviews", "numReviews", "reviewsCount"]),
    (Field::Price, &["price", "Price"]),
    (Field::IsBestSeller, &["isBestSeller", "bestSeller", "bestseller"]),
    (Field::BoughtInLastMonth, &["boughtInLastMonth", "bought_last_month"]),
    (Field::CategoryName, &["categoryName", "category", "Category"]),
    (Field::EcoLabel, &["EcoLabel", "ecoLabel", "eco_label"]),
    (Field::Description, &["description", "Details", "detail"]),
];

pub fn aliases(field: Field) -> &'static [&'static str] {
    FIELD_ALIASES
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map(|(_, keys)| *keys)
        .unwrap_or_default()
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// First present value for `field`, following alias order.
pub fn probe(record: &RawRecord, field: Field) -> Option<&Value> {
    aliases(field)
        .iter()
        .filter_map(|key| record.get(*key))
        .find(|value| is_present(value))
}

// =============================================================================
// COERCION
// =============================================================================

/// Scan a decimal number (`-?digits(.digits)?`) starting at the front of `raw`.
fn leading_decimal(raw: &str) -> Option<f64> {
    let bytes = raw.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        has_digits = true;
    }
    if !has_digits {
        return None;
    }
    raw[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Numeric coercion: strips separators, whitespace and currency symbols.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-'))
                .collect();
            leading_decimal(&cleaned).unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn coerce_count(value: &Value) -> u64 {
    let n = coerce_number(value);
    if n <= 0.0 { 0 } else { n.round() as u64 }
}

/// Star coercion: first decimal number in the text (`"4.5 out of 5 stars"`), clamped to `[0, 5]`.
pub fn coerce_stars(value: &Value) -> f64 {
    let stars = match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        Value::String(s) => s
            .char_indices()
            .filter(|(_, c)| c.is_ascii_digit())
            .find_map(|(idx, _)| leading_decimal(&s[idx..]))
            .unwrap_or(0.0),
        _ => 0.0,
    };
    stars.clamp(0.0, 5.0)
}

/// Boolean coercion: `true`, `1`, and the case-insensitive strings
/// `"true"`, `"yes"`, `"1"`, `"bestseller"`.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1" | "bestseller"),
        _ => false,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn code_from_number(n: f64) -> Option<EcoLabel> {
    if n.fract() != 0.0 || !(0.0..=2.0).contains(&n) {
        return None;
    }
    EcoLabel::from_code(n as u8)
}

/// Eco label coercion: numeric code, numeric string, or label name; any
/// other truthy flag reads as `Moderate`, everything else as `Harmful`.
pub fn coerce_eco_label(value: &Value) -> EcoLabel {
    match value {
        Value::Number(n) => n.as_f64().and_then(code_from_number).unwrap_or_default(),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(code_from_number)
            .or_else(|| EcoLabel::from_name(s))
            .unwrap_or_else(|| if coerce_bool(value) { EcoLabel::Moderate } else { EcoLabel::Harmful }),
        Value::Bool(true) => EcoLabel::Moderate,
        _ => EcoLabel::Harmful,
    }
}

/// Text coercion: strings as-is, numbers and booleans rendered.
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

// =============================================================================
// NORMALIZATION
// =============================================================================

fn text_field(record: &RawRecord, field: Field) -> String {
    probe(record, field).map(coerce_text).unwrap_or_default()
}

/// Normalize one raw record. Returns `None` when no identifier alias is present.
pub fn normalize_record(record: &RawRecord) -> Option<Product> {
    let asin = text_field(record, Field::Asin);
    if asin.is_empty() {
        return None;
    }
    let category_name = text_field(record, Field::CategoryName);

    Some(Product {
        asin,
        title: text_field(record, Field::Title),
        img_url: text_field(record, Field::ImgUrl),
        product_url: text_field(record, Field::ProductUrl),
        stars: probe(record, Field::Stars).map_or(0.0, coerce_stars),
        reviews: probe(record, Field::Reviews).map_or(0, coerce_count),
        price: probe(record, Field::Price).map_or(0.0, coerce_number).max(0.0),
        is_best_seller: probe(record, Field::IsBestSeller).is_some_and(coerce_bool),
        bought_in_last_month: probe(record, Field::BoughtInLastMonth).map_or(0, coerce_count),
        category_name: if category_name.is_empty() { UNCATEGORIZED.to_owned() } else { category_name },
        eco_label: probe(record, Field::EcoLabel).map(coerce_eco_label).unwrap_or_default(),
        description: probe(record, Field::Description).map(coerce_text),
    })
}

/// Normalize a batch, dropping records without an identifier and keeping the
/// first record for each duplicated identifier.
pub fn normalize_records<'a, I>(records: I) -> Vec<Product>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut seen = HashSet::new();
    let mut skipped = 0usize;
    let mut products = Vec::new();
    for record in records {
        match normalize_record(record) {
            Some(product) if seen.insert(product.asin.clone()) => products.push(product),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} product records without a unique identifier");
    }
    products
}
