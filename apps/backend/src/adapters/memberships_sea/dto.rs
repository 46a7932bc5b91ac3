//! DTOs for memberships_sea adapter.

/// DTO for appending a player to a team roster.
#[derive(Debug, Clone)]
pub struct MemberAdd {
    pub team_id: i64,
    pub user_id: i64,
    pub seat: i16,
}

impl MemberAdd {
    pub fn new(team_id: i64, user_id: i64, seat: i16) -> Self {
        Self {
            team_id,
            user_id,
            seat,
        }
    }
}
