//! Backend endpoint configuration resolved at build time.
//!
//! DESIGN
//! ======
//! A single rule picks every base URL: an `ECOSTORE_*` variable present at
//! compile time wins, otherwise debug builds talk to the local services and
//! release builds talk to the deployed host.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const LOCAL_API_BASE_URL: &str = "http://localhost:5001";
pub const LOCAL_ASSISTANT_BASE_URL: &str = "http://localhost:5002";
pub const DEPLOYED_API_BASE_URL: &str = "http://35.173.215.140:5001";
pub const DEPLOYED_ASSISTANT_BASE_URL: &str = "http://35.173.215.140:5002";
pub const DEFAULT_PRODUCTS_CSV_URL: &str = "/assets/products.csv";

pub const PRODUCTS_PATH: &str = "/api/products";
pub const PREDICT_PATH: &str = "/api/predict";
pub const RECOMMEND_PATH: &str = "/api/recommend";
pub const HEALTH_PATH: &str = "/api/health";
pub const CHAT_PATH: &str = "/api/ai/chat";

/// Build flavor used to pick default hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Mode of the current compilation.
    pub const fn current() -> Self {
        if cfg!(debug_assertions) { Self::Development } else { Self::Production }
    }
}

/// Base URLs for the product API, the assistant service, and the bundled dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base_url: String,
    pub assistant_base_url: String,
    pub products_csv_url: String,
}

impl ApiConfig {
    /// Configuration baked into this build.
    ///
    /// Optional compile-time overrides:
    /// - `ECOSTORE_API_BASE_URL`
    /// - `ECOSTORE_ASSISTANT_BASE_URL`
    /// - `ECOSTORE_PRODUCTS_CSV_URL`
    pub fn from_build() -> Self {
        Self::resolve(
            BuildMode::current(),
            option_env!("ECOSTORE_API_BASE_URL"),
            option_env!("ECOSTORE_ASSISTANT_BASE_URL"),
            option_env!("ECOSTORE_PRODUCTS_CSV_URL"),
        )
    }

    fn resolve(mode: BuildMode, api: Option<&str>, assistant: Option<&str>, csv: Option<&str>) -> Self {
        let (default_api, default_assistant) = match mode {
            BuildMode::Development => (LOCAL_API_BASE_URL, LOCAL_ASSISTANT_BASE_URL),
            BuildMode::Production => (DEPLOYED_API_BASE_URL, DEPLOYED_ASSISTANT_BASE_URL),
        };
        Self {
            api_base_url: base_url(api, default_api),
            assistant_base_url: base_url(assistant, default_assistant),
            products_csv_url: non_blank(csv).unwrap_or(DEFAULT_PRODUCTS_CSV_URL).to_owned(),
        }
    }

    pub fn products_url(&self) -> String {
        format!("{}{PRODUCTS_PATH}", self.api_base_url)
    }

    pub fn predict_url(&self) -> String {
        format!("{}{PREDICT_PATH}", self.api_base_url)
    }

    pub fn recommend_url(&self) -> String {
        format!("{}{RECOMMEND_PATH}", self.api_base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}{HEALTH_PATH}", self.api_base_url)
    }

    pub fn chat_url(&self) -> String {
        format!("{}{CHAT_PATH}", self.assistant_base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build()
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn base_url(raw: Option<&str>, default: &str) -> String {
    non_blank(raw).unwrap_or(default).trim_end_matches('/').to_owned()
}
