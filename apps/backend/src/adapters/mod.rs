//! SeaORM adapters. Each module owns the raw DB calls for one table and
//! returns `DbErr`; the repos layer maps to `DomainError` at its boundary.

pub mod memberships_sea;
pub mod messages_sea;
pub mod rooms_sea;
pub mod scores_sea;
pub mod teams_sea;
pub mod users_sea;
