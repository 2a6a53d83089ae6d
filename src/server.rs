//! SSR host for the storefront.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `app::shell` for every client route so `hydrate()` has markup to
//! attach to, and serves the compiled WASM bundle from `/pkg` and the bundled
//! dataset from `/assets`. The product API and the assistant are separate
//! services; this host only serves the client.

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::config::get_configuration;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};

pub const ASSETS_PATH: &str = "/assets";

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    Config(String),

    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

/// Directory under the site root that holds files served at `/assets`.
pub fn assets_dir(site_root: &Path) -> PathBuf {
    site_root.join("assets")
}

/// Leptos SSR routes plus static `/pkg` and `/assets` trees.
pub fn router(options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(options.site_root.as_ref());
    let pkg_dir = site_root.join(&*options.site_pkg_dir);

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .nest_service(ASSETS_PATH, ServeDir::new(assets_dir(&site_root)))
        .layer(TraceLayer::new_for_http())
        .with_state(options)
}

/// Load `[package.metadata.leptos]`, bind `site-addr`, and serve until shutdown.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded or the
/// listener cannot bind.
pub async fn run() -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let options = conf.leptos_options;
    let addr = options.site_addr;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "ecostore listening");
    axum::serve(listener, router(options)).await?;
    Ok(())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
