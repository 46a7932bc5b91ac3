//! Room directory HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::extractors::room_key::RoomKey;
use crate::extractors::validated_json::{Validate, ValidatedJson};
use crate::routes::teams::TeamResponse;
use crate::services::bootstrap;
use crate::services::rooms::{RoomOverview, RoomService, RoomSpec};
use crate::services::scores::ScoreService;
use crate::state::app_state::AppState;
use crate::ws::hub::RoomEvent;

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: i64,
    pub name: String,
    pub turn_seconds: i32,
    pub team_ids: Vec<i64>,
}

impl From<RoomOverview> for RoomResponse {
    fn from(overview: RoomOverview) -> Self {
        Self {
            id: overview.room.id,
            name: overview.room.name,
            turn_seconds: overview.room.turn_seconds,
            team_ids: overview.team_ids,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub turn_seconds: i32,
}

impl Validate for CreateRoomRequest {
    fn validate(&self) -> Result<(), DomainError> {
        RoomSpec::new(self.name.clone(), self.turn_seconds).map(|_| ())
    }
}

/// GET /api/rooms
async fn list_rooms(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<RoomResponse>>, AppError> {
    let overviews = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = RoomService::new();
            Ok(service.list(txn).await?)
        })
    })
    .await?;

    Ok(web::Json(
        overviews.into_iter().map(RoomResponse::from).collect(),
    ))
}

/// POST /api/rooms
async fn create_room(
    http_req: HttpRequest,
    body: ValidatedJson<CreateRoomRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();

    let overview = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let spec = RoomSpec::new(request.name, request.turn_seconds)?;
            let service = RoomService::new();
            Ok(service.create(txn, spec).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(RoomResponse::from(overview)))
}

/// DELETE /api/rooms/{room_id}
async fn delete_room(
    http_req: HttpRequest,
    room_key: RoomKey,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room_id = room_key.0;

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = RoomService::new();
            Ok(service.delete(txn, room_id).await?)
        })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/rooms/reset
///
/// Wipe the directory and recreate the default rooms, exactly as the
/// startup initializer does.
async fn reset_rooms(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<RoomResponse>>, AppError> {
    let seeded = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(bootstrap::seed_rooms(txn).await?) })
    })
    .await?;

    Ok(web::Json(
        seeded
            .into_iter()
            .map(|s| RoomResponse {
                id: s.room.id,
                name: s.room.name,
                turn_seconds: s.room.turn_seconds,
                team_ids: s.team_ids,
            })
            .collect(),
    ))
}

/// PATCH /api/rooms/{room_id}/calculate-scores
///
/// Recompute each team's score from accumulated round results and return
/// the updated teams.
async fn calculate_scores(
    http_req: HttpRequest,
    room_key: RoomKey,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<TeamResponse>>, AppError> {
    let room_id = room_key.0;

    let teams = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = ScoreService::new();
            Ok(service.recalculate(txn, room_id).await?)
        })
    })
    .await?;

    app_state
        .realtime()
        .broadcast(room_id, RoomEvent::RoomChanged { room_id });

    Ok(web::Json(teams.into_iter().map(TeamResponse::from).collect()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_rooms))
            .route(web::post().to(create_room)),
    );
    // Literal segment must register before the `{room_id}` captures.
    cfg.service(web::resource("/reset").route(web::post().to(reset_rooms)));
    cfg.service(web::resource("/{room_id}").route(web::delete().to(delete_room)));
    cfg.service(
        web::resource("/{room_id}/calculate-scores").route(web::patch().to(calculate_scores)),
    );
}
