use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info, instrument};

use super::types::{RoomName, RoomResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for inspecting a room's current members
///
/// GET /rooms/:room
/// Returns members in join order, or 404 once the room has emptied
#[instrument(name = "get_room", skip(state))]
pub async fn get_room(
    State(state): State<AppState>,
    Path(room): Path<String>,
) -> Result<Json<RoomResponse>, AppError> {
    let name = RoomName::from(room.as_str());

    let members = state.relay.room_members(&name).await.ok_or_else(|| {
        debug!(room = %name, "Room not found");
        AppError::NotFound(format!("Room {} not found", name))
    })?;

    info!(room = %name, member_count = members.len(), "Room retrieved");

    Ok(Json(RoomResponse {
        room: name.to_string(),
        members: members.iter().map(ToString::to_string).collect(),
    }))
}

/// HTTP handler for listing rooms that currently have members
///
/// GET /rooms
#[instrument(name = "list_rooms", skip(state))]
pub async fn list_rooms(State(state): State<AppState>) -> Json<Vec<String>> {
    let rooms: Vec<String> = state
        .relay
        .room_names()
        .await
        .iter()
        .map(ToString::to_string)
        .collect();

    debug!(room_count = rooms.len(), "Rooms listed");
    Json(rooms)
}
