//! Folio API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p folio-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use folio_common::{init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so the environment picks the format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    init_tracing_with_config(tracing_config);

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting Folio API Server"
    );

    if let Err(e) = folio_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
