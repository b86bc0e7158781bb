use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::relay::get_stats;
use crate::room::{get_room, list_rooms};
use crate::shared::AppState;
use crate::websockets::websocket_handler;

/// All HTTP and WebSocket routes of the relay
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/stats", get(get_stats))
        .route("/rooms", get(list_rooms))
        .route("/rooms/:room", get(get_room))
        .route("/ws", get(websocket_handler))
        // Browsers connect from arbitrary origins
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
