//! DTOs for teams_sea adapter.

/// DTO for creating a new team within a room.
#[derive(Debug, Clone)]
pub struct TeamCreate {
    pub room_id: i64,
    pub name: String,
    pub position: i16,
}

impl TeamCreate {
    pub fn new(room_id: i64, name: impl Into<String>, position: i16) -> Self {
        Self {
            room_id,
            name: name.into(),
            position,
        }
    }
}
