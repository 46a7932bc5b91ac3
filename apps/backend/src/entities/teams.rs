use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "room_id")]
    pub room_id: i64,
    pub name: String,
    #[sea_orm(column_type = "SmallInteger")]
    pub position: i16,
    #[sea_orm(column_name = "describer_id")]
    pub describer_id: Option<i64>,
    #[sea_orm(column_name = "leader_id")]
    pub leader_id: Option<i64>,
    pub score: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id"
    )]
    Room,
    #[sea_orm(has_many = "super::team_players::Entity")]
    TeamPlayers,
    #[sea_orm(has_many = "super::round_results::Entity")]
    RoundResults,
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::team_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamPlayers.def()
    }
}

impl Related<super::round_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoundResults.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
