//! SeaORM adapter for accumulated round results.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::round_results;

pub mod dto;

pub use dto::ResultCreate;

pub async fn insert_round_result<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ResultCreate,
) -> Result<round_results::Model, sea_orm::DbErr> {
    let result_active = round_results::ActiveModel {
        id: NotSet,
        room_id: Set(dto.room_id),
        team_id: Set(dto.team_id),
        points: Set(dto.points),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    result_active.insert(conn).await
}

pub async fn find_all_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<round_results::Model>, sea_orm::DbErr> {
    round_results::Entity::find()
        .filter(round_results::Column::TeamId.eq(team_id))
        .all(conn)
        .await
}
