use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::auth::claims::Claims;
use crate::db::require_db;
use crate::db::txn::SharedTxn;
use crate::error::AppError;
use crate::repos::users;
use crate::state::app_state::AppState;

/// The authenticated user behind the current request.
///
/// Claims are placed in request extensions by the `JwtExtract` middleware;
/// this extractor resolves them to a local user row, creating the row on the
/// subject's first request (issuance itself is external).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub sub: String,
    pub email: Option<String>,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // Read Claims from request extensions (stored by JwtExtract middleware)
            let claims = req
                .extensions()
                .get::<Claims>()
                .ok_or_else(AppError::unauthorized_missing_bearer)?
                .clone();

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available".to_string()))?;

            // Derive a readable default username from the email local part.
            let username_hint = claims.email.split('@').next().filter(|s| !s.is_empty());

            let user = if let Some(shared_txn) = SharedTxn::from_req(&req) {
                users::ensure_user(shared_txn.transaction(), &claims.sub, username_hint).await?
            } else {
                let db = require_db(app_state)?;
                users::ensure_user(db, &claims.sub, username_hint).await?
            };

            Ok(CurrentUser {
                id: user.id,
                sub: claims.sub,
                email: Some(claims.email),
            })
        })
    }
}
