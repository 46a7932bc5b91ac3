//! Round result repository, feeding the score aggregator.

use sea_orm::ConnectionTrait;

use crate::adapters::scores_sea;
use crate::errors::domain::DomainError;

pub async fn record_result<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    team_id: i64,
    points: i32,
) -> Result<(), DomainError> {
    let dto = scores_sea::ResultCreate::new(room_id, team_id, points);
    scores_sea::insert_round_result(conn, dto).await?;
    Ok(())
}

/// Total accumulated points for a team across all recorded rounds.
pub async fn team_points_total<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<i32, DomainError> {
    let results = scores_sea::find_all_by_team(conn, team_id).await?;
    Ok(results.iter().map(|r| r.points).sum())
}
