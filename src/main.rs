//! `ecostore` server binary (requires the `ssr` feature).

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = ecostore::server::run().await {
        tracing::error!(error = %err, "ecostore server failed");
        std::process::exit(1);
    }
}
