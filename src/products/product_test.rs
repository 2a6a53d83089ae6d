use super::*;

fn sample() -> Product {
    Product {
        asin: "B001".into(),
        title: "Bamboo Toothbrush".into(),
        img_url: String::new(),
        product_url: String::new(),
        stars: 4.2,
        reviews: 120,
        price: 3.99,
        is_best_seller: true,
        bought_in_last_month: 50,
        category_name: "Bath".into(),
        eco_label: EcoLabel::EcoFriendly,
        description: None,
    }
}

// =============================================================
// EcoLabel
// =============================================================

#[test]
fn eco_label_codes_match_glossary() {
    assert_eq!(EcoLabel::Harmful.code(), 0);
    assert_eq!(EcoLabel::Moderate.code(), 1);
    assert_eq!(EcoLabel::EcoFriendly.code(), 2);
    assert_eq!(EcoLabel::from_code(3), None);
}

#[test]
fn eco_label_default_is_harmful() {
    assert_eq!(EcoLabel::default(), EcoLabel::Harmful);
}

#[test]
fn eco_label_from_name_accepts_spelling_variants() {
    assert_eq!(EcoLabel::from_name("Eco-friendly"), Some(EcoLabel::EcoFriendly));
    assert_eq!(EcoLabel::from_name("eco friendly"), Some(EcoLabel::EcoFriendly));
    assert_eq!(EcoLabel::from_name(" MODERATE "), Some(EcoLabel::Moderate));
    assert_eq!(EcoLabel::from_name("green"), None);
}

#[test]
fn eco_label_rejects_unknown_code_on_deserialize() {
    assert!(serde_json::from_str::<EcoLabel>("7").is_err());
    assert_eq!(serde_json::from_str::<EcoLabel>("1").unwrap(), EcoLabel::Moderate);
}

// =============================================================
// Product
// =============================================================

#[test]
fn product_serializes_with_dataset_field_names() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value["imgUrl"], "");
    assert_eq!(value["isBestSeller"], true);
    assert_eq!(value["categoryName"], "Bath");
    assert_eq!(value["EcoLabel"], 2);
    assert!(value.get("description").is_none());
}

#[test]
fn product_query_carries_title_price_category() {
    let query = sample().query();
    assert_eq!(query.title, "Bamboo Toothbrush");
    assert_eq!(query.price, 3.99);
    assert_eq!(query.category_name, "Bath");
}

#[test]
fn chat_context_uses_numeric_label() {
    let context = sample().chat_context();
    assert_eq!(context.eco_label, 2);
    assert_eq!(context.category, "Bath");
}
