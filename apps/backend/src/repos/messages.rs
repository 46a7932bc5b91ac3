//! Message log repository. Append-only.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::messages_sea;
use crate::entities::messages;
use crate::errors::domain::DomainError;

/// Chat message domain model
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i64,
    pub room_id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: OffsetDateTime,
}

impl From<messages::Model> for ChatMessage {
    fn from(model: messages::Model) -> Self {
        Self {
            id: model.id,
            room_id: model.room_id,
            author_id: model.author_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

pub async fn append<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    author_id: i64,
    content: &str,
) -> Result<ChatMessage, DomainError> {
    let dto = messages_sea::MessageCreate::new(room_id, author_id, content);
    let model = messages_sea::insert_message(conn, dto).await?;
    Ok(ChatMessage::from(model))
}

pub async fn list_recent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    limit: u64,
) -> Result<Vec<ChatMessage>, DomainError> {
    let models = messages_sea::find_recent_by_room(conn, room_id, limit).await?;
    Ok(models.into_iter().map(ChatMessage::from).collect())
}
