//! SeaORM adapter for the team roster.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::teams;

pub mod dto;

pub use dto::TeamCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find_by_id(team_id).one(conn).await
}

pub async fn find_by_room_and_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    team_id: i64,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find()
        .filter(teams::Column::Id.eq(team_id))
        .filter(teams::Column::RoomId.eq(room_id))
        .one(conn)
        .await
}

/// All teams of a room in their configured order.
pub async fn find_all_by_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find()
        .filter(teams::Column::RoomId.eq(room_id))
        .order_by_asc(teams::Column::Position)
        .order_by_asc(teams::Column::Id)
        .all(conn)
        .await
}

pub async fn insert_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TeamCreate,
) -> Result<teams::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let team_active = teams::ActiveModel {
        id: NotSet,
        room_id: Set(dto.room_id),
        name: Set(dto.name),
        position: Set(dto.position),
        describer_id: Set(None),
        leader_id: Set(None),
        score: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    };
    team_active.insert(conn).await
}

/// Write describer and leader in one UPDATE so a concurrent reader can never
/// observe a half-advanced rotation.
pub async fn set_roles<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    describer_id: i64,
    leader_id: i64,
) -> Result<teams::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let result = teams::Entity::update_many()
        .col_expr(teams::Column::DescriberId, Expr::val(describer_id).into())
        .col_expr(teams::Column::LeaderId, Expr::val(leader_id).into())
        .col_expr(teams::Column::UpdatedAt, Expr::val(now).into())
        .filter(teams::Column::Id.eq(team_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound("Team not found".to_string()));
    }

    teams::Entity::find_by_id(team_id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Team not found".to_string()))
}

pub async fn set_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    score: i32,
) -> Result<teams::Model, sea_orm::DbErr> {
    let team = teams::Entity::find_by_id(team_id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Team not found".to_string()))?;

    let mut team_active: teams::ActiveModel = team.into();
    team_active.score = Set(score);
    team_active.updated_at = Set(time::OffsetDateTime::now_utc());
    team_active.update(conn).await
}

pub async fn set_position<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    position: i16,
) -> Result<(), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let result = teams::Entity::update_many()
        .col_expr(teams::Column::Position, Expr::val(position).into())
        .col_expr(teams::Column::UpdatedAt, Expr::val(now).into())
        .filter(teams::Column::Id.eq(team_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound("Team not found".to_string()));
    }
    Ok(())
}

/// Delete one team. Returns the number of rows removed (0 when absent).
pub async fn delete_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = teams::Entity::delete_by_id(team_id).exec(conn).await?;
    Ok(result.rows_affected)
}
