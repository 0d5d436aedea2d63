//! HTTP server for poddash.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use poddash_core::models::EpisodeDataset;
use poddash_data::aggregator::{monthly_overview, MonthlyRow};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes;

// ── AppState ──────────────────────────────────────────────────────────────────

/// Application state shared across handlers.
///
/// The dataset is read-only after load, so requests share it without locking;
/// the monthly overview is selection-independent and precomputed once here.
pub struct AppState {
    pub dataset: Arc<EpisodeDataset>,
    pub monthly: Vec<MonthlyRow>,
}

impl AppState {
    pub fn new(dataset: EpisodeDataset) -> Self {
        let monthly = monthly_overview(&dataset.records);
        Self {
            dataset: Arc::new(dataset),
            monthly,
        }
    }
}

// ── Server ────────────────────────────────────────────────────────────────────

/// Build the router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::page_routes())
        .merge(routes::api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until externally terminated.
pub async fn run(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
