use serde_json::json;

use super::*;

fn record(value: serde_json::Value) -> RawRecord {
    value.as_object().cloned().unwrap()
}

// =============================================================
// Alias probing
// =============================================================

#[test]
fn every_field_has_aliases() {
    for (field, keys) in FIELD_ALIASES {
        assert!(!keys.is_empty(), "{field:?} has no aliases");
        assert_eq!(aliases(*field), *keys);
    }
}

#[test]
fn probe_uses_first_present_alias() {
    let raw = record(json!({ "ASIN": "B2", "asin": "", "id": "B3" }));
    assert_eq!(probe(&raw, Field::Asin), Some(&json!("B2")));
}

#[test]
fn probe_skips_null_values() {
    let raw = record(json!({ "price": null, "Price": "9.99" }));
    assert_eq!(probe(&raw, Field::Price), Some(&json!("9.99")));
}

// =============================================================
// Coercion
// =============================================================

#[test]
fn coerce_number_strips_currency_and_separators() {
    assert_eq!(coerce_number(&json!("$1,234.50")), 1234.5);
    assert_eq!(coerce_number(&json!(" 2 500 ")), 2500.0);
    assert_eq!(coerce_number(&json!(42)), 42.0);
}

#[test]
fn coerce_number_defaults_to_zero() {
    assert_eq!(coerce_number(&json!("n/a")), 0.0);
    assert_eq!(coerce_number(&json!(true)), 0.0);
    assert_eq!(coerce_number(&json!([1])), 0.0);
}

#[test]
fn coerce_stars_extracts_first_decimal() {
    assert_eq!(coerce_stars(&json!("4.5 out of 5 stars")), 4.5);
    assert_eq!(coerce_stars(&json!("rated 3 stars")), 3.0);
    assert_eq!(coerce_stars(&json!("none")), 0.0);
}

#[test]
fn coerce_stars_clamps_to_five() {
    assert_eq!(coerce_stars(&json!(7.2)), 5.0);
    assert_eq!(coerce_stars(&json!(-1)), 0.0);
    assert_eq!(coerce_stars(&json!("12 stars")), 5.0);
}

#[test]
fn coerce_bool_accepts_truthy_spellings() {
    for raw in [json!(true), json!(1), json!("TRUE"), json!("Yes"), json!("1"), json!("BestSeller")] {
        assert!(coerce_bool(&raw), "{raw} should be true");
    }
    for raw in [json!(false), json!(0), json!("no"), json!("0"), json!(null)] {
        assert!(!coerce_bool(&raw), "{raw} should be false");
    }
}

#[test]
fn coerce_eco_label_reads_codes_and_names() {
    assert_eq!(coerce_eco_label(&json!(2)), EcoLabel::EcoFriendly);
    assert_eq!(coerce_eco_label(&json!("2")), EcoLabel::EcoFriendly);
    assert_eq!(coerce_eco_label(&json!(1.0)), EcoLabel::Moderate);
    assert_eq!(coerce_eco_label(&json!("eco-friendly")), EcoLabel::EcoFriendly);
}

#[test]
fn coerce_eco_label_defaults_unrecognized_to_harmful() {
    assert_eq!(coerce_eco_label(&json!(9)), EcoLabel::Harmful);
    assert_eq!(coerce_eco_label(&json!(1.5)), EcoLabel::Harmful);
    assert_eq!(coerce_eco_label(&json!("unknown")), EcoLabel::Harmful);
}

#[test]
fn coerce_eco_label_truthy_flag_is_moderate() {
    assert_eq!(coerce_eco_label(&json!(true)), EcoLabel::Moderate);
    assert_eq!(coerce_eco_label(&json!("yes")), EcoLabel::Moderate);
}

#[test]
fn coerce_text_renders_numbers() {
    assert_eq!(coerce_text(&json!(1234)), "1234");
    assert_eq!(coerce_text(&json!("  padded ")), "padded");
}

// =============================================================
// normalize_record
// =============================================================

#[test]
fn normalize_record_handles_mixed_source_shapes() {
    let raw = record(json!({
        "id": "B100",
        "Price": "$1,234.50",
        "rating": "4.5 out of 5 stars",
        "bestseller": "Yes",
    }));
    let product = normalize_record(&raw).unwrap();
    assert_eq!(product.asin, "B100");
    assert_eq!(product.price, 1234.5);
    assert_eq!(product.stars, 4.5);
    assert!(product.is_best_seller);
}

#[test]
fn normalize_record_applies_defaults() {
    let product = normalize_record(&record(json!({ "asin": "B1" }))).unwrap();
    assert_eq!(product.title, "");
    assert_eq!(product.reviews, 0);
    assert_eq!(product.bought_in_last_month, 0);
    assert_eq!(product.category_name, UNCATEGORIZED);
    assert_eq!(product.eco_label, EcoLabel::Harmful);
    assert!(!product.is_best_seller);
    assert_eq!(product.description, None);
}

#[test]
fn normalize_record_blank_category_is_uncategorized() {
    let product = normalize_record(&record(json!({ "asin": "B1", "categoryName": "   " }))).unwrap();
    assert_eq!(product.category_name, UNCATEGORIZED);
}

#[test]
fn normalize_record_clamps_negative_counts_and_price() {
    let product = normalize_record(&record(json!({ "asin": "B1", "reviews": -4, "price": "-3" }))).unwrap();
    assert_eq!(product.reviews, 0);
    assert_eq!(product.price, 0.0);
}

#[test]
fn normalize_record_reads_alternate_keys() {
    let raw = record(json!({
        "ASIN": "B7",
        "Name": "Jute Bag",
        "imageURL": "https://img/b7.jpg",
        "link": "https://shop/b7",
        "numReviews": "1,024",
        "bought_last_month": "300",
        "Category": "Bags",
        "EcoLabel": "2",
        "Details": "Reusable",
    }));
    let product = normalize_record(&raw).unwrap();
    assert_eq!(product.title, "Jute Bag");
    assert_eq!(product.img_url, "https://img/b7.jpg");
    assert_eq!(product.product_url, "https://shop/b7");
    assert_eq!(product.reviews, 1024);
    assert_eq!(product.bought_in_last_month, 300);
    assert_eq!(product.category_name, "Bags");
    assert_eq!(product.eco_label, EcoLabel::EcoFriendly);
    assert_eq!(product.description.as_deref(), Some("Reusable"));
}

#[test]
fn normalize_record_without_identifier_is_skipped() {
    assert!(normalize_record(&record(json!({ "title": "Orphan" }))).is_none());
}

#[test]
fn normalize_record_numeric_identifier_becomes_text() {
    let product = normalize_record(&record(json!({ "id": 77 }))).unwrap();
    assert_eq!(product.asin, "77");
}

// =============================================================
// normalize_records
// =============================================================

#[test]
fn normalize_records_keeps_first_duplicate() {
    let raws = vec![
        record(json!({ "asin": "A", "title": "first" })),
        record(json!({ "title": "no id" })),
        record(json!({ "asin": "A", "title": "second" })),
        record(json!({ "asin": "B" })),
    ];
    let products = normalize_records(&raws);
    let summary: Vec<_> = products.iter().map(|p| (p.asin.as_str(), p.title.as_str())).collect();
    assert_eq!(summary, vec![("A", "first"), ("B", "")]);
}
