//! Identity repository. Issuance lives in the external auth collaborator;
//! this repo only resolves and mirrors its subjects.

use sea_orm::{ConnectionTrait, SqlErr};

use crate::adapters::users_sea;
use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind};

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub sub: String,
    pub username: Option<String>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            sub: model.sub,
            username: model.username,
        }
    }
}

/// Resolve a player reference, reporting the miss in roster terms.
pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, DomainError> {
    let user = users_sea::find_by_id(conn, user_id).await?;
    user.map(User::from).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("player {user_id} not found"))
    })
}

/// Resolve a verified token subject to a local user row, creating it on
/// first sight. A concurrent first request may win the insert; the unique
/// index on `sub` turns that into a re-read.
pub async fn ensure_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sub: &str,
    username: Option<&str>,
) -> Result<User, DomainError> {
    if let Some(user) = users_sea::find_by_sub(conn, sub).await? {
        return Ok(User::from(user));
    }

    match users_sea::insert_user(conn, sub, username).await {
        Ok(user) => Ok(User::from(user)),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                let user = users_sea::find_by_sub(conn, sub).await?;
                user.map(User::from).ok_or_else(|| {
                    DomainError::not_found(NotFoundKind::User, format!("user '{sub}' not found"))
                })
            }
            _ => Err(e.into()),
        },
    }
}
