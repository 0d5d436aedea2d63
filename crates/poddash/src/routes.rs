//! API routes for poddash.
//!
//! One page route plus two JSON endpoints. Each dropdown change on the client
//! refreshes both endpoints: the monthly figure re-renders from the
//! precomputed rows while the per-episode view is recomputed per request.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use poddash_data::aggregator::episode_series;
use poddash_web::page::render_index;
use poddash_web::views::{EpisodeView, MonthlyView};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::server::AppState;

type AppStateArc = Arc<AppState>;

// ── Page route ────────────────────────────────────────────────────────────────

pub fn page_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(index))
}

async fn index(State(state): State<AppStateArc>) -> Html<String> {
    Html(render_index(&state.dataset.episode_titles))
}

// ── API routes ────────────────────────────────────────────────────────────────

pub fn api_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/monthly", get(monthly))
        .route("/api/episode", get(episode))
}

async fn monthly(State(state): State<AppStateArc>) -> Json<MonthlyView> {
    Json(MonthlyView::new(&state.monthly))
}

#[derive(Debug, Deserialize)]
pub struct EpisodeQuery {
    pub title: String,
}

async fn episode(
    State(state): State<AppStateArc>,
    Query(query): Query<EpisodeQuery>,
) -> Json<EpisodeView> {
    // The dropdown only offers known titles, so an unknown one means stale
    // client state; answer with the placeholder view rather than an error.
    if !state.dataset.contains_title(&query.title) {
        warn!("Unknown episode title requested: {}", query.title);
    } else {
        debug!("Rendering episode view for: {}", query.title);
    }

    let series = episode_series(&state.dataset.records, &query.title);
    Json(EpisodeView::new(&series))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
