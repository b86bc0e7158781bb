use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::relay::Relay;
use crate::websockets::{ConnectionManager, InMemoryConnectionManager};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
    pub connection_manager: Arc<dyn ConnectionManager>,
}

impl AppState {
    pub fn new(connection_manager: Arc<dyn ConnectionManager>) -> Self {
        let relay = Arc::new(Relay::new(Arc::clone(&connection_manager)));
        Self {
            relay,
            connection_manager,
        }
    }

    /// State backed by real WebSocket connections
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryConnectionManager::new()))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
