//! Room directory service.

use sea_orm::DatabaseTransaction;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::rooms::{self, Room};
use crate::repos::teams;

/// Validated input for creating a room. Parsing is the validation; handlers
/// never pass raw payload fields further down.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSpec {
    pub name: String,
    pub turn_seconds: i32,
}

pub const MAX_ROOM_NAME_LEN: usize = 64;
pub const MIN_TURN_SECONDS: i32 = 10;
pub const MAX_TURN_SECONDS: i32 = 600;

impl RoomSpec {
    pub fn new(name: impl Into<String>, turn_seconds: i32) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("room name must not be empty"));
        }
        if name.chars().count() > MAX_ROOM_NAME_LEN {
            return Err(DomainError::validation(format!(
                "room name must be at most {MAX_ROOM_NAME_LEN} characters"
            )));
        }
        if !(MIN_TURN_SECONDS..=MAX_TURN_SECONDS).contains(&turn_seconds) {
            return Err(DomainError::validation(format!(
                "turn duration must be between {MIN_TURN_SECONDS} and {MAX_TURN_SECONDS} seconds"
            )));
        }
        Ok(Self { name, turn_seconds })
    }
}

/// A room together with its ordered team ids.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomOverview {
    pub room: Room,
    pub team_ids: Vec<i64>,
}

/// Room directory domain service.
pub struct RoomService;

impl RoomService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        spec: RoomSpec,
    ) -> Result<RoomOverview, DomainError> {
        let room = rooms::create_room(txn, &spec.name, spec.turn_seconds).await?;
        Ok(RoomOverview {
            room,
            team_ids: Vec::new(),
        })
    }

    pub async fn list(&self, txn: &DatabaseTransaction) -> Result<Vec<RoomOverview>, DomainError> {
        let all = rooms::find_all(txn).await?;
        let mut overviews = Vec::with_capacity(all.len());
        for room in all {
            let team_ids = teams::list_by_room(txn, room.id)
                .await?
                .into_iter()
                .map(|t| t.id)
                .collect();
            overviews.push(RoomOverview { room, team_ids });
        }
        Ok(overviews)
    }

    pub async fn delete(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
    ) -> Result<(), DomainError> {
        rooms::delete_room(txn, room_id).await
    }

    /// Replace the room's ordered team list. Every id must name a team of
    /// this room; positions are rewritten to match the given order.
    pub async fn update_team_order(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
        team_ids: &[i64],
    ) -> Result<(), DomainError> {
        rooms::require_room(txn, room_id).await?;

        let current: Vec<i64> = teams::list_by_room(txn, room_id)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();

        for team_id in team_ids {
            if !current.contains(team_id) {
                return Err(DomainError::not_found(
                    NotFoundKind::Team,
                    format!("team {team_id} not found in room {room_id}"),
                ));
            }
        }

        for (position, team_id) in team_ids.iter().enumerate() {
            teams::set_position(txn, *team_id, position as i16).await?;
        }
        Ok(())
    }
}

impl Default for RoomService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{RoomSpec, MAX_TURN_SECONDS, MIN_TURN_SECONDS};

    #[test]
    fn spec_trims_and_accepts() {
        let spec = RoomSpec::new("  Lounge  ", 60).unwrap();
        assert_eq!(spec.name, "Lounge");
        assert_eq!(spec.turn_seconds, 60);
    }

    #[test]
    fn spec_rejects_empty_name() {
        assert!(RoomSpec::new("   ", 60).is_err());
        assert!(RoomSpec::new("", 60).is_err());
    }

    #[test]
    fn spec_rejects_overlong_name() {
        let name = "x".repeat(65);
        assert!(RoomSpec::new(name, 60).is_err());
    }

    #[test]
    fn spec_bounds_turn_duration() {
        assert!(RoomSpec::new("a", MIN_TURN_SECONDS - 1).is_err());
        assert!(RoomSpec::new("a", MAX_TURN_SECONDS + 1).is_err());
        assert!(RoomSpec::new("a", MIN_TURN_SECONDS).is_ok());
        assert!(RoomSpec::new("a", MAX_TURN_SECONDS).is_ok());
    }
}
