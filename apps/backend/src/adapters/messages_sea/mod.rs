//! SeaORM adapter for the append-only message log.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::messages;

pub mod dto;

pub use dto::MessageCreate;

pub async fn insert_message<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MessageCreate,
) -> Result<messages::Model, sea_orm::DbErr> {
    let message_active = messages::ActiveModel {
        id: NotSet,
        room_id: Set(dto.room_id),
        author_id: Set(dto.author_id),
        content: Set(dto.content),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    message_active.insert(conn).await
}

/// Newest messages of a room, most recent first.
pub async fn find_recent_by_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    limit: u64,
) -> Result<Vec<messages::Model>, sea_orm::DbErr> {
    messages::Entity::find()
        .filter(messages::Column::RoomId.eq(room_id))
        .order_by_desc(messages::Column::CreatedAt)
        .order_by_desc(messages::Column::Id)
        .limit(limit)
        .all(conn)
        .await
}
