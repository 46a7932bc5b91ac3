//! Team roster repository.

use sea_orm::{ConnectionTrait, SqlErr};

use crate::adapters::{memberships_sea, teams_sea};
use crate::entities::teams;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Team domain model, roster in seat order.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    pub room_id: i64,
    pub name: String,
    pub position: i16,
    pub describer_id: Option<i64>,
    pub leader_id: Option<i64>,
    pub score: i32,
    pub player_ids: Vec<i64>,
}

impl Team {
    fn from_model(model: teams::Model, player_ids: Vec<i64>) -> Self {
        Self {
            id: model.id,
            room_id: model.room_id,
            name: model.name,
            position: model.position,
            describer_id: model.describer_id,
            leader_id: model.leader_id,
            score: model.score,
            player_ids,
        }
    }
}

fn team_not_found(e: sea_orm::DbErr) -> DomainError {
    match e {
        sea_orm::DbErr::RecordNotFound(detail) => {
            DomainError::not_found(NotFoundKind::Team, detail)
        }
        other => other.into(),
    }
}

/// Roster of a team as user ids in seat order.
pub async fn roster<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<i64>, DomainError> {
    let members = memberships_sea::find_all_by_team(conn, team_id).await?;
    Ok(members.into_iter().map(|m| m.user_id).collect())
}

/// Seats currently occupied on a team, in order.
pub async fn seats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<i16>, DomainError> {
    let members = memberships_sea::find_all_by_team(conn, team_id).await?;
    Ok(members.into_iter().map(|m| m.seat).collect())
}

pub async fn find_in_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    team_id: i64,
) -> Result<Option<Team>, DomainError> {
    let Some(model) = teams_sea::find_by_room_and_id(conn, room_id, team_id).await? else {
        return Ok(None);
    };
    let player_ids = roster(conn, model.id).await?;
    Ok(Some(Team::from_model(model, player_ids)))
}

pub async fn require_in_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    team_id: i64,
) -> Result<Team, DomainError> {
    find_in_room(conn, room_id, team_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Team,
            format!("team {team_id} not found in room {room_id}"),
        )
    })
}

pub async fn list_by_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<Team>, DomainError> {
    let models = teams_sea::find_all_by_room(conn, room_id).await?;
    let mut teams = Vec::with_capacity(models.len());
    for model in models {
        let player_ids = roster(conn, model.id).await?;
        teams.push(Team::from_model(model, player_ids));
    }
    Ok(teams)
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    name: &str,
    position: i16,
) -> Result<Team, DomainError> {
    let dto = teams_sea::TeamCreate::new(room_id, name, position);
    let model = teams_sea::insert_team(conn, dto).await?;
    Ok(Team::from_model(model, Vec::new()))
}

pub async fn delete_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<(), DomainError> {
    let removed = teams_sea::delete_team(conn, team_id).await?;
    if removed == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Team,
            format!("team {team_id} not found"),
        ));
    }
    Ok(())
}

pub async fn add_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    user_id: i64,
    seat: i16,
) -> Result<(), DomainError> {
    let dto = memberships_sea::MemberAdd::new(team_id, user_id, seat);
    match memberships_sea::insert_member(conn, dto).await {
        Ok(_) => Ok(()),
        // The (team_id, user_id) unique index backstops the duplicate check
        // against concurrent joins.
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(DomainError::conflict(
                ConflictKind::DuplicateMember,
                format!("player {user_id} already on team {team_id}"),
            )),
            _ => Err(e.into()),
        },
    }
}

/// Returns true when a membership row was actually removed.
pub async fn remove_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    let removed = memberships_sea::delete_member(conn, team_id, user_id).await?;
    Ok(removed > 0)
}

/// Advance both role columns in one write.
pub async fn set_roles<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    describer_id: i64,
    leader_id: i64,
) -> Result<Team, DomainError> {
    let model = teams_sea::set_roles(conn, team_id, describer_id, leader_id)
        .await
        .map_err(team_not_found)?;
    let player_ids = roster(conn, model.id).await?;
    Ok(Team::from_model(model, player_ids))
}

pub async fn set_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    score: i32,
) -> Result<Team, DomainError> {
    let model = teams_sea::set_score(conn, team_id, score)
        .await
        .map_err(team_not_found)?;
    let player_ids = roster(conn, model.id).await?;
    Ok(Team::from_model(model, player_ids))
}

pub async fn set_position<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    position: i16,
) -> Result<(), DomainError> {
    teams_sea::set_position(conn, team_id, position)
        .await
        .map_err(team_not_found)
}
