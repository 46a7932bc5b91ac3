//! Startup seeding: wipe the room directory and recreate the default rooms,
//! each with its fixed set of empty teams.
//!
//! Any failure here must abort startup; a process running with a partially
//! seeded directory is worse than one that refuses to start.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::db::txn::with_txn;
use crate::domain::seed::{DEFAULT_ROOMS, DEFAULT_TEAMS};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::rooms::{self, Room};
use crate::repos::teams;
use crate::services::rooms::RoomService;
use crate::state::app_state::AppState;

/// One room produced by the seeding pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededRoom {
    pub room: Room,
    pub team_ids: Vec<i64>,
}

/// Wipe and reseed the room directory inside the given transaction.
pub async fn seed_rooms(txn: &DatabaseTransaction) -> Result<Vec<SeededRoom>, DomainError> {
    let wiped = rooms::delete_all(txn).await?;
    info!(wiped, "cleared room directory");

    let room_service = RoomService::new();

    let mut seeded = Vec::with_capacity(DEFAULT_ROOMS.len());
    for spec in DEFAULT_ROOMS {
        // The wipe above means this lookup can only miss; it stays as the
        // idempotence guard should the wipe ever become selective.
        if rooms::find_by_name(txn, spec.name).await?.is_some() {
            continue;
        }

        let room = rooms::create_room(txn, spec.name, spec.turn_seconds).await?;

        let mut team_ids = Vec::with_capacity(DEFAULT_TEAMS.len());
        for (position, team_name) in DEFAULT_TEAMS.iter().enumerate() {
            let team = teams::create_team(txn, room.id, team_name, position as i16).await?;
            team_ids.push(team.id);
        }
        room_service
            .update_team_order(txn, room.id, &team_ids)
            .await?;

        seeded.push(SeededRoom { room, team_ids });
    }

    Ok(seeded)
}

/// Run the seeding pass in its own transaction. Called once at startup and
/// by the explicit reset endpoint.
pub async fn run(state: &AppState) -> Result<Vec<SeededRoom>, AppError> {
    let seeded = with_txn(None, state, |txn| {
        Box::pin(async move { Ok(seed_rooms(txn).await?) })
    })
    .await?;

    info!(rooms = seeded.len(), "seeded default rooms");
    Ok(seeded)
}
