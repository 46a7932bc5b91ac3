//! DTOs for rooms_sea adapter.

/// DTO for creating a new room.
#[derive(Debug, Clone)]
pub struct RoomCreate {
    pub name: String,
    pub turn_seconds: i32,
}

impl RoomCreate {
    pub fn new(name: impl Into<String>, turn_seconds: i32) -> Self {
        Self {
            name: name.into(),
            turn_seconds,
        }
    }
}
