//! Bardo Museum Site Server
//!
//! Entry point: loads configuration, initializes tracing and serves the site.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use museum_site::config::AppConfig;
use museum_site::server::start_server;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env (if present) before anything reads the environment
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED); LOG_FORMAT=json for log shippers
    let filter = EnvFilter::from_default_env().add_directive("info".parse().unwrap());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }

    let config = match AppConfig::load() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!(name: "config.invalid", error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        persistence = ?config.persistence.provider,
        admin_enabled = config.admin.enabled,
        "Configuration loaded"
    );

    if let Err(e) = start_server(config).await {
        error!(name: "server.failed", error = %e, "Server stopped with an error");
        std::process::exit(1);
    }
}
