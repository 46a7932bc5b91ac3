//! DTOs for scores_sea adapter.

/// DTO for recording a round result for a team.
#[derive(Debug, Clone)]
pub struct ResultCreate {
    pub room_id: i64,
    pub team_id: i64,
    pub points: i32,
}

impl ResultCreate {
    pub fn new(room_id: i64, team_id: i64, points: i32) -> Self {
        Self {
            room_id,
            team_id,
            points,
        }
    }
}
