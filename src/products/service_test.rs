use std::cell::Cell;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::types::{PredictResponse, ProductQuery, RawRecord, RecommendResponse};

/// Scripted backend: `remote`/`csv` of `None` simulate a failed request.
#[derive(Default)]
struct FakeBackend {
    remote: Option<Vec<RawRecord>>,
    csv: Option<String>,
    csv_calls: Cell<usize>,
}

impl CatalogBackend for FakeBackend {
    async fn fetch_products(&self) -> Result<Vec<RawRecord>, IngestError> {
        self.remote.clone().ok_or_else(|| IngestError::Network("offline".into()))
    }

    async fn fetch_products_csv(&self) -> Result<String, IngestError> {
        self.csv_calls.set(self.csv_calls.get() + 1);
        self.csv.clone().ok_or_else(|| IngestError::Csv("missing".into()))
    }

    async fn predict(&self, _query: &ProductQuery) -> Result<PredictResponse, IngestError> {
        Err(IngestError::Status(500))
    }

    async fn recommend(&self, _query: &ProductQuery) -> Result<RecommendResponse, IngestError> {
        Err(IngestError::Status(500))
    }
}

fn raw(asin: &str, title: &str, category: &str) -> RawRecord {
    json!({ "asin": asin, "title": title, "categoryName": category, "price": 5 })
        .as_object()
        .cloned()
        .unwrap()
}

fn kitchen_catalog() -> Vec<RawRecord> {
    vec![
        raw("k1", "Steel Bottle", "Kitchen"),
        raw("g1", "Solar Lamp", "Garden"),
        raw("k2", "Bamboo Cutlery", "Kitchen"),
        raw("k3", "Glass Jar", "kitchen"),
        raw("k4", "Beeswax Wrap", "Kitchen"),
        raw("k5", "Compost Bin", "KITCHEN"),
    ]
}

fn remote_service(records: Vec<RawRecord>) -> ProductService<FakeBackend> {
    ProductService::new(FakeBackend { remote: Some(records), ..FakeBackend::default() })
}

const CSV: &str = "ASIN,Name,Category,Price\nc1,Canvas Tote,Bags,\"$1,200.00\"\nc2,Cork Mat,Home,15\n";

// =============================================================
// Source selection
// =============================================================

#[test]
fn remote_success_skips_csv() {
    let service = remote_service(kitchen_catalog());
    let page = block_on(service.get_products(ProductQueryParams::default()));
    assert_eq!(page.total, 6);
    assert_eq!(service.backend().csv_calls.get(), 0);
}

#[test]
fn remote_failure_falls_back_to_csv() {
    let service = ProductService::new(FakeBackend { csv: Some(CSV.to_owned()), ..FakeBackend::default() });
    let page = block_on(service.get_products(ProductQueryParams::default()));
    let asins: Vec<_> = page.products.iter().map(|p| p.asin.as_str()).collect();
    assert_eq!(asins, vec!["c1", "c2"]);
    assert_eq!(page.products[0].price, 1200.0);
    assert_eq!(page.products[0].category_name, "Bags");
}

#[test]
fn csv_failure_yields_empty_page() {
    let service = ProductService::new(FakeBackend::default());
    let page = block_on(service.get_products(ProductQueryParams::default()));
    assert!(page.products.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(service.backend().csv_calls.get(), 1);
}

#[test]
fn csv_path_uses_same_filters() {
    let service = ProductService::new(FakeBackend { csv: Some(CSV.to_owned()), ..FakeBackend::default() });
    let products = block_on(service.search_products("tote"));
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].asin, "c1");
}

#[test]
fn csv_with_spaced_separators_normalizes_quoted_columns() {
    let csv = "asin, title, price, categoryName\nB1, \"Mug, ceramic\", \"$1,050.00\", Kitchen\n";
    let service = ProductService::new(FakeBackend { csv: Some(csv.to_owned()), ..FakeBackend::default() });
    let products = block_on(service.products_by_category("kitchen"));
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Mug, ceramic");
    assert_eq!(products[0].price, 1050.0);
}

// =============================================================
// Filtering and paging
// =============================================================

#[test]
fn category_page_reports_filtered_total() {
    let service = remote_service(kitchen_catalog());
    let params = ProductQueryParams { category: Some("Kitchen".into()), limit: 2, ..ProductQueryParams::default() };
    let page = block_on(service.get_products(params));
    assert_eq!(page.products.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 2);
}

#[test]
fn second_page_continues_after_first() {
    let service = remote_service(kitchen_catalog());
    let params = ProductQueryParams {
        category: Some("kitchen".into()),
        page: 2,
        limit: 2,
        ..ProductQueryParams::default()
    };
    let page = block_on(service.get_products(params));
    let asins: Vec<_> = page.products.iter().map(|p| p.asin.as_str()).collect();
    assert_eq!(asins, vec!["k3", "k4"]);
}

#[test]
fn empty_filters_are_ignored() {
    let service = remote_service(kitchen_catalog());
    let params = ProductQueryParams { category: Some(String::new()), search: Some(String::new()), ..ProductQueryParams::default() };
    assert_eq!(block_on(service.get_products(params)).total, 6);
}

#[test]
fn search_matches_category_names() {
    let service = remote_service(kitchen_catalog());
    assert_eq!(block_on(service.search_products("garden")).len(), 1);
}

#[test]
fn products_by_category_filters_exactly() {
    let service = remote_service(kitchen_catalog());
    assert_eq!(block_on(service.products_by_category("Garden")).len(), 1);
    assert!(block_on(service.products_by_category("Gard")).is_empty());
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn product_by_id_finds_match() {
    let service = remote_service(kitchen_catalog());
    let product = block_on(service.product_by_id("k4")).unwrap();
    assert_eq!(product.title, "Beeswax Wrap");
}

#[test]
fn missing_product_is_not_found() {
    let service = remote_service(kitchen_catalog());
    assert_eq!(block_on(service.find_product("zzz")), Err(IngestError::NotFound("zzz".into())));
    assert!(block_on(service.product_by_id("zzz")).is_none());
}

#[test]
fn categories_summarize_full_catalog() {
    let service = remote_service(kitchen_catalog());
    let categories = block_on(service.categories());
    assert_eq!(categories[0].name, "Kitchen");
    assert_eq!(categories[0].product_count, 3);
    assert_eq!(categories.len(), 4);
}
