//! Repository functions for the domain layer.
//!
//! Repos translate adapter rows into domain models and `DbErr` into
//! `DomainError`; nothing above this layer sees SeaORM types.

pub mod messages;
pub mod rooms;
pub mod scores;
pub mod teams;
pub mod users;
