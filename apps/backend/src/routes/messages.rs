//! Message log HTTP routes.
//!
//! The REST surface mirrors the realtime channel: posting here persists the
//! message and fans it out to room subscribers just like a `chat` frame.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::room_key::RoomKey;
use crate::extractors::validated_json::{Validate, ValidatedJson};
use crate::services::messages::{MessageService, MAX_MESSAGE_LEN};
use crate::state::app_state::AppState;
use crate::ws::hub::RoomEvent;
use crate::ws::protocol::MessageView;

#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    pub content: String,
}

impl Validate for PostMessageRequest {
    fn validate(&self) -> Result<(), DomainError> {
        let trimmed = self.content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("message content must not be empty"));
        }
        if trimmed.chars().count() > MAX_MESSAGE_LEN {
            return Err(DomainError::validation(format!(
                "message content must be at most {MAX_MESSAGE_LEN} characters"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct MessagesQuery {
    limit: Option<u64>,
}

/// GET /api/rooms/{room_id}/messages
async fn list_messages(
    http_req: HttpRequest,
    room_key: RoomKey,
    query: web::Query<MessagesQuery>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<MessageView>>, AppError> {
    let room_id = room_key.0;
    let limit = query.limit;

    let messages = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = MessageService::new();
            Ok(service.recent(txn, room_id, limit).await?)
        })
    })
    .await?;

    Ok(web::Json(
        messages.into_iter().map(MessageView::from).collect(),
    ))
}

/// POST /api/rooms/{room_id}/messages
async fn post_message(
    http_req: HttpRequest,
    room_key: RoomKey,
    current_user: CurrentUser,
    body: ValidatedJson<PostMessageRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room_id = room_key.0;
    let author_id = current_user.id;
    let request = body.into_inner();

    let message = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = MessageService::new();
            Ok(service.post(txn, room_id, author_id, &request.content).await?)
        })
    })
    .await?;

    let view = MessageView::from(message);
    app_state.realtime().broadcast(
        room_id,
        RoomEvent::Chat {
            room_id,
            message: view.clone(),
        },
    );

    Ok(HttpResponse::Created().json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{room_id}/messages")
            .route(web::get().to(list_messages))
            .route(web::post().to(post_message)),
    );
}
