//! Room directory repository.

use sea_orm::{ConnectionTrait, SqlErr};

use crate::adapters::rooms_sea;
use crate::entities::rooms;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Room domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub turn_seconds: i32,
}

impl From<rooms::Model> for Room {
    fn from(model: rooms::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            turn_seconds: model.turn_seconds,
        }
    }
}

fn room_not_found(e: sea_orm::DbErr) -> DomainError {
    match e {
        sea_orm::DbErr::RecordNotFound(detail) => {
            DomainError::not_found(NotFoundKind::Room, detail)
        }
        other => other.into(),
    }
}

pub async fn require_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Room, DomainError> {
    rooms_sea::require_room(conn, room_id)
        .await
        .map(Room::from)
        .map_err(room_not_found)
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Room>, DomainError> {
    let room = rooms_sea::find_by_name(conn, name).await?;
    Ok(room.map(Room::from))
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Room>, DomainError> {
    let rooms = rooms_sea::find_all(conn).await?;
    Ok(rooms.into_iter().map(Room::from).collect())
}

pub async fn create_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    turn_seconds: i32,
) -> Result<Room, DomainError> {
    let dto = rooms_sea::RoomCreate::new(name, turn_seconds);
    match rooms_sea::insert_room(conn, dto).await {
        Ok(model) => Ok(Room::from(model)),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(DomainError::conflict(
                ConflictKind::UniqueRoomName,
                format!("room name '{name}' already taken"),
            )),
            _ => Err(e.into()),
        },
    }
}

pub async fn delete_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<(), DomainError> {
    let removed = rooms_sea::delete_room(conn, room_id).await?;
    if removed == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Room,
            format!("room {room_id} not found"),
        ));
    }
    Ok(())
}

pub async fn delete_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(rooms_sea::delete_all(conn).await?)
}
