//! Team roster service: membership and turn rotation.

use sea_orm::DatabaseTransaction;

use crate::domain::{rotation, squad};
use crate::errors::domain::DomainError;
use crate::repos::teams::{self, Team};
use crate::repos::{rooms, users};

pub const MAX_TEAM_NAME_LEN: usize = 64;

pub fn validate_team_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation("team name must not be empty"));
    }
    if name.chars().count() > MAX_TEAM_NAME_LEN {
        return Err(DomainError::validation(format!(
            "team name must be at most {MAX_TEAM_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

/// Team roster domain service.
pub struct TeamService;

impl TeamService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
        name: &str,
    ) -> Result<Team, DomainError> {
        let name = validate_team_name(name)?;
        rooms::require_room(txn, room_id).await?;
        let position = teams::list_by_room(txn, room_id).await?.len() as i16;
        teams::create_team(txn, room_id, &name, position).await
    }

    pub async fn get(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
        team_id: i64,
    ) -> Result<Team, DomainError> {
        rooms::require_room(txn, room_id).await?;
        teams::require_in_room(txn, room_id, team_id).await
    }

    pub async fn list(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
    ) -> Result<Vec<Team>, DomainError> {
        rooms::require_room(txn, room_id).await?;
        teams::list_by_room(txn, room_id).await
    }

    pub async fn delete(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
        team_id: i64,
    ) -> Result<(), DomainError> {
        rooms::require_room(txn, room_id).await?;
        teams::require_in_room(txn, room_id, team_id).await?;
        teams::delete_team(txn, team_id).await
    }

    /// Append a player to the team roster.
    ///
    /// Capacity and duplicate checks run against the roster read in this
    /// transaction; the (team_id, user_id) unique index backstops duplicates
    /// against concurrent joins. Capacity has no such backstop and can
    /// overfill under truly simultaneous requests.
    pub async fn add_player(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
        team_id: i64,
        user_id: i64,
    ) -> Result<Team, DomainError> {
        rooms::require_room(txn, room_id).await?;
        let team = teams::require_in_room(txn, room_id, team_id).await?;
        users::require_player(txn, user_id).await?;

        squad::admit(&team.player_ids, user_id)?;

        let seats = teams::seats(txn, team_id).await?;
        let seat = squad::next_seat(&seats);
        teams::add_member(txn, team_id, user_id, seat).await?;

        teams::require_in_room(txn, room_id, team_id).await
    }

    /// Remove a player from the roster. Removing a non-member is a no-op
    /// that returns the unchanged team.
    pub async fn remove_player(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
        team_id: i64,
        user_id: i64,
    ) -> Result<Team, DomainError> {
        rooms::require_room(txn, room_id).await?;
        let team = teams::require_in_room(txn, room_id, team_id).await?;

        let (remaining, is_member) = squad::without(&team.player_ids, user_id);
        if !is_member {
            return Ok(team);
        }

        teams::remove_member(txn, team_id, user_id).await?;
        Ok(Team {
            player_ids: remaining,
            ..team
        })
    }

    /// Advance describer and leader by one seat, wrapping modulo roster size.
    /// Both role columns land in a single write.
    pub async fn rotate_roles(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
        team_id: i64,
    ) -> Result<Team, DomainError> {
        rooms::require_room(txn, room_id).await?;
        let team = teams::require_in_room(txn, room_id, team_id).await?;

        let Some(roles) = rotation::advance(&team.player_ids, team.describer_id) else {
            return Err(DomainError::validation(
                "cannot rotate roles on a team with no players",
            ));
        };

        teams::set_roles(txn, team.id, roles.describer, roles.leader).await
    }
}

impl Default for TeamService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::validate_team_name;

    #[test]
    fn team_name_is_trimmed() {
        assert_eq!(validate_team_name(" Red ").unwrap(), "Red");
    }

    #[test]
    fn team_name_rejects_empty_and_overlong() {
        assert!(validate_team_name("  ").is_err());
        assert!(validate_team_name(&"x".repeat(65)).is_err());
    }
}
