//! Score aggregation service.
//!
//! Round bookkeeping appends results; the aggregator recomputes each team's
//! persisted score from the accumulated results on demand.

use sea_orm::DatabaseTransaction;

use crate::errors::domain::DomainError;
use crate::repos::teams::{self, Team};
use crate::repos::{rooms, scores};

/// Score aggregator domain service.
pub struct ScoreService;

impl ScoreService {
    pub fn new() -> Self {
        Self
    }

    /// Record one team's points for a finished round.
    pub async fn record_result(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
        team_id: i64,
        points: i32,
    ) -> Result<(), DomainError> {
        rooms::require_room(txn, room_id).await?;
        teams::require_in_room(txn, room_id, team_id).await?;
        scores::record_result(txn, room_id, team_id, points).await
    }

    /// Recompute and persist every team score in the room from accumulated
    /// round results, returning the updated teams.
    pub async fn recalculate(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
    ) -> Result<Vec<Team>, DomainError> {
        rooms::require_room(txn, room_id).await?;

        let room_teams = teams::list_by_room(txn, room_id).await?;
        let mut updated = Vec::with_capacity(room_teams.len());
        for team in room_teams {
            let total = scores::team_points_total(txn, team.id).await?;
            updated.push(teams::set_score(txn, team.id, total).await?);
        }
        Ok(updated)
    }
}

impl Default for ScoreService {
    fn default() -> Self {
        Self::new()
    }
}
