use axum::{extract::State, Json};
use tracing::{debug, instrument};

use super::events::RelayStats;
use crate::shared::AppState;

/// HTTP handler for relay counters
///
/// GET /stats
#[instrument(name = "get_stats", skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Json<RelayStats> {
    let stats = state.relay.stats().await;
    debug!(
        sessions = stats.sessions,
        rooms = stats.rooms,
        rejected_events = stats.rejected_events,
        "Stats requested"
    );
    Json(stats)
}
