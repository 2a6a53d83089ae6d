use super::*;

#[test]
fn development_uses_local_hosts() {
    let config = ApiConfig::resolve(BuildMode::Development, None, None, None);
    assert_eq!(config.api_base_url, LOCAL_API_BASE_URL);
    assert_eq!(config.assistant_base_url, LOCAL_ASSISTANT_BASE_URL);
    assert_eq!(config.products_csv_url, DEFAULT_PRODUCTS_CSV_URL);
}

#[test]
fn production_uses_deployed_hosts() {
    let config = ApiConfig::resolve(BuildMode::Production, None, None, None);
    assert_eq!(config.api_base_url, DEPLOYED_API_BASE_URL);
    assert_eq!(config.assistant_base_url, DEPLOYED_ASSISTANT_BASE_URL);
}

#[test]
fn override_wins_over_mode_and_drops_trailing_slash() {
    let config = ApiConfig::resolve(BuildMode::Production, Some("https://shop.example/"), None, None);
    assert_eq!(config.api_base_url, "https://shop.example");
    assert_eq!(config.products_url(), "https://shop.example/api/products");
}

#[test]
fn blank_override_falls_back_to_default() {
    let config = ApiConfig::resolve(BuildMode::Development, Some("  "), Some(""), Some(" "));
    assert_eq!(config.api_base_url, LOCAL_API_BASE_URL);
    assert_eq!(config.assistant_base_url, LOCAL_ASSISTANT_BASE_URL);
    assert_eq!(config.products_csv_url, DEFAULT_PRODUCTS_CSV_URL);
}

#[test]
fn endpoint_urls_join_paths() {
    let config = ApiConfig::resolve(BuildMode::Development, None, None, None);
    assert_eq!(config.predict_url(), "http://localhost:5001/api/predict");
    assert_eq!(config.recommend_url(), "http://localhost:5001/api/recommend");
    assert_eq!(config.health_url(), "http://localhost:5001/api/health");
    assert_eq!(config.chat_url(), "http://localhost:5002/api/ai/chat");
}
