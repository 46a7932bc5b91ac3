//! SeaORM adapter for the room directory.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::rooms;

pub mod dto;

pub use dto::RoomCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<rooms::Model>, sea_orm::DbErr> {
    rooms::Entity::find_by_id(room_id).one(conn).await
}

/// Find room by ID or return RecordNotFound error.
pub async fn require_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<rooms::Model, sea_orm::DbErr> {
    find_by_id(conn, room_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Room not found".to_string()))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<rooms::Model>, sea_orm::DbErr> {
    rooms::Entity::find()
        .filter(rooms::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<rooms::Model>, sea_orm::DbErr> {
    rooms::Entity::find()
        .order_by_asc(rooms::Column::Id)
        .all(conn)
        .await
}

pub async fn insert_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoomCreate,
) -> Result<rooms::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let room_active = rooms::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        turn_seconds: Set(dto.turn_seconds),
        created_at: Set(now),
        updated_at: Set(now),
    };
    room_active.insert(conn).await
}

/// Delete one room. Returns the number of rows removed (0 when absent).
pub async fn delete_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = rooms::Entity::delete_by_id(room_id).exec(conn).await?;
    Ok(result.rows_affected)
}

/// Unconditionally remove every room. Teams, messages and round results go
/// with them via FK cascade. Bootstrap only.
pub async fn delete_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    let result = rooms::Entity::delete_many().exec(conn).await?;
    Ok(result.rows_affected)
}
