use std::sync::Arc;

use abtrow_chat::{
    config::Config,
    routes,
    services::completion::OpenAiClient,
    state::AppState,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, filter::ParseError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cfg = Config::from_env();

    let (env_filter, invalid_filter) = match EnvFilter::try_from_default_env() {
        Ok(f) => (f, None),
        Err(_) => configured_filter(&cfg.log_level),
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).init();

    if let Some(e) = invalid_filter {
        warn!(filter = %cfg.log_level, error = %e, "ABTROW_LOG is not a valid tracing filter; using 'info'");
    }

    info!(version = env!("CARGO_PKG_VERSION"), model = %cfg.model, "abtrow-chat starting");

    let client = OpenAiClient::new(cfg.api_key.clone(), Some(cfg.base_url.clone()), cfg.request_timeout)?;
    if !client.has_api_key() {
        warn!("OPENAI_API_KEY is not set; every chat request will fail until it is");
    }

    let state = AppState::new(Arc::new(client), cfg.model.clone()).shared();

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let addr = cfg.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "abtrow chat running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("abtrow-chat stopped");
    Ok(())
}

// Falls back to `info`, handing back the parse error to log once tracing is up.
fn configured_filter(level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(level) {
        Ok(f) => (f, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_log_level_is_used() {
        let (filter, invalid) = configured_filter("debug,tower_http=warn");
        assert!(invalid.is_none());
        assert!(filter.to_string().contains("tower_http=warn"));
    }

    #[test]
    fn invalid_log_level_falls_back_to_info() {
        let (filter, invalid) = configured_filter("abtrow_chat=loud");
        assert!(invalid.is_some());
        assert!(filter.to_string().contains("info"));
    }
}
