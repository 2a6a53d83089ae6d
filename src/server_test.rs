use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

/// Options rooted at `public/`, where the bundled dataset lives in the source tree.
fn options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("ecostore")
        .site_root(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
        .build()
}

async fn status_of(uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router(options()).oneshot(request).await.unwrap().status()
}

// =============================================================
// Static files
// =============================================================

#[test]
fn assets_dir_sits_under_site_root() {
    assert_eq!(assets_dir(Path::new("target/site")), PathBuf::from("target/site/assets"));
}

#[tokio::test]
async fn bundled_dataset_is_served() {
    assert_eq!(status_of("/assets/products.csv").await, StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    assert_eq!(status_of("/assets/nope.csv").await, StatusCode::NOT_FOUND);
}

// =============================================================
// Health
// =============================================================

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}
