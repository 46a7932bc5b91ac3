//! DTOs for messages_sea adapter.

/// DTO for appending a chat message to a room's log.
#[derive(Debug, Clone)]
pub struct MessageCreate {
    pub room_id: i64,
    pub author_id: i64,
    pub content: String,
}

impl MessageCreate {
    pub fn new(room_id: i64, author_id: i64, content: impl Into<String>) -> Self {
        Self {
            room_id,
            author_id,
            content: content.into(),
        }
    }
}
