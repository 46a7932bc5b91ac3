//! SeaORM adapter for identity records.
//!
//! Token issuance lives in the external auth collaborator; this adapter only
//! mirrors its subjects into the local users table.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entities::users;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn find_by_sub<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sub: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Sub.eq(sub))
        .one(conn)
        .await
}

pub async fn insert_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sub: &str,
    username: Option<&str>,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let user_active = users::ActiveModel {
        id: NotSet,
        sub: Set(sub.to_string()),
        username: Set(username.map(str::to_string)),
        created_at: Set(now),
        updated_at: Set(now),
    };
    user_active.insert(conn).await
}
