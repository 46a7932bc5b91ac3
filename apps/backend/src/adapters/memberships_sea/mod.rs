//! SeaORM adapter for team membership rows.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::team_players;

pub mod dto;

pub use dto::MemberAdd;

/// Membership rows of a team in seat order. Seats are append-only and never
/// renumbered, so this is also the join order.
pub async fn find_all_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<team_players::Model>, sea_orm::DbErr> {
    team_players::Entity::find()
        .filter(team_players::Column::TeamId.eq(team_id))
        .order_by_asc(team_players::Column::Seat)
        .all(conn)
        .await
}

pub async fn find_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    user_id: i64,
) -> Result<Option<team_players::Model>, sea_orm::DbErr> {
    team_players::Entity::find()
        .filter(team_players::Column::TeamId.eq(team_id))
        .filter(team_players::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

pub async fn insert_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MemberAdd,
) -> Result<team_players::Model, sea_orm::DbErr> {
    let member_active = team_players::ActiveModel {
        id: NotSet,
        team_id: Set(dto.team_id),
        user_id: Set(dto.user_id),
        seat: Set(dto.seat),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    member_active.insert(conn).await
}

/// Delete a membership row. Returns the number of rows removed (0 when the
/// player was not a member).
pub async fn delete_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = team_players::Entity::delete_many()
        .filter(team_players::Column::TeamId.eq(team_id))
        .filter(team_players::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
