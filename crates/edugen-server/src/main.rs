//! Binary entrypoint for the edugen HTTP server.
//!
//! Reads configuration from environment variables (see [`edugen_server::config`]):
//! `EDUGEN_API_KEY` is required; model, base URL, port, timeout and retry
//! budget all have defaults. A `.env` file is honored if present.

use edugen_server::config::AppConfig;
use edugen_server::router::build_router;
use edugen_server::state::AppState;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "startup configuration error");
            std::process::exit(1);
        }
    };

    let state = AppState::new(&config);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(model = %config.model, "edugen server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|err| panic!("failed to bind {addr}: {err}"));
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "server exited with error");
        std::process::exit(1);
    }
}
