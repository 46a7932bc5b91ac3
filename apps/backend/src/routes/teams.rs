//! Team roster HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::extractors::validated_json::{Validate, ValidatedJson};
use crate::repos::teams::Team;
use crate::services::scores::ScoreService;
use crate::services::teams::{validate_team_name, TeamService};
use crate::state::app_state::AppState;
use crate::ws::hub::RoomEvent;

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: i64,
    pub room_id: i64,
    pub name: String,
    pub players: Vec<i64>,
    pub describer_id: Option<i64>,
    pub leader_id: Option<i64>,
    pub score: i32,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            room_id: team.room_id,
            name: team.name,
            players: team.player_ids,
            describer_id: team.describer_id,
            leader_id: team.leader_id,
            score: team.score,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

impl Validate for CreateTeamRequest {
    fn validate(&self) -> Result<(), DomainError> {
        validate_team_name(&self.name).map(|_| ())
    }
}

#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub user_id: i64,
}

impl Validate for AddPlayerRequest {
    fn validate(&self) -> Result<(), DomainError> {
        if self.user_id <= 0 {
            return Err(DomainError::validation("user_id must be positive"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct RecordResultRequest {
    pub points: i32,
}

pub const MAX_ROUND_POINTS: i32 = 1000;

impl Validate for RecordResultRequest {
    fn validate(&self) -> Result<(), DomainError> {
        if self.points.checked_abs().map_or(true, |p| p > MAX_ROUND_POINTS) {
            return Err(DomainError::validation(format!(
                "round points must be within ±{MAX_ROUND_POINTS}"
            )));
        }
        Ok(())
    }
}

/// GET /api/rooms/{room_id}/teams
async fn list_teams(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<TeamResponse>>, AppError> {
    let room_id = path.into_inner();

    let teams = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = TeamService::new();
            Ok(service.list(txn, room_id).await?)
        })
    })
    .await?;

    Ok(web::Json(teams.into_iter().map(TeamResponse::from).collect()))
}

/// POST /api/rooms/{room_id}/teams
async fn create_team(
    http_req: HttpRequest,
    path: web::Path<i64>,
    body: ValidatedJson<CreateTeamRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room_id = path.into_inner();
    let request = body.into_inner();

    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = TeamService::new();
            Ok(service.create(txn, room_id, &request.name).await?)
        })
    })
    .await?;

    app_state
        .realtime()
        .broadcast(room_id, RoomEvent::RoomChanged { room_id });

    Ok(HttpResponse::Created().json(TeamResponse::from(team)))
}

/// GET /api/rooms/{room_id}/teams/{team_id}
async fn get_team(
    http_req: HttpRequest,
    path: web::Path<(i64, i64)>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TeamResponse>, AppError> {
    let (room_id, team_id) = path.into_inner();

    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = TeamService::new();
            Ok(service.get(txn, room_id, team_id).await?)
        })
    })
    .await?;

    Ok(web::Json(TeamResponse::from(team)))
}

/// DELETE /api/rooms/{room_id}/teams/{team_id}
async fn delete_team(
    http_req: HttpRequest,
    path: web::Path<(i64, i64)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (room_id, team_id) = path.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = TeamService::new();
            Ok(service.delete(txn, room_id, team_id).await?)
        })
    })
    .await?;

    app_state
        .realtime()
        .broadcast(room_id, RoomEvent::RoomChanged { room_id });

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/rooms/{room_id}/teams/{team_id}/players
async fn add_player(
    http_req: HttpRequest,
    path: web::Path<(i64, i64)>,
    body: ValidatedJson<AddPlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (room_id, team_id) = path.into_inner();
    let user_id = body.user_id;

    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = TeamService::new();
            Ok(service.add_player(txn, room_id, team_id, user_id).await?)
        })
    })
    .await?;

    app_state
        .realtime()
        .broadcast(room_id, RoomEvent::RoomChanged { room_id });

    Ok(HttpResponse::Created().json(TeamResponse::from(team)))
}

/// DELETE /api/rooms/{room_id}/teams/{team_id}/players/{user_id}
///
/// Removing a non-member is a no-op returning the unchanged team.
async fn remove_player(
    http_req: HttpRequest,
    path: web::Path<(i64, i64, i64)>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TeamResponse>, AppError> {
    let (room_id, team_id, user_id) = path.into_inner();

    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = TeamService::new();
            Ok(service
                .remove_player(txn, room_id, team_id, user_id)
                .await?)
        })
    })
    .await?;

    app_state
        .realtime()
        .broadcast(room_id, RoomEvent::RoomChanged { room_id });

    Ok(web::Json(TeamResponse::from(team)))
}

/// POST /api/rooms/{room_id}/teams/{team_id}/rotate
///
/// Advance describer and leader by one seat for the next round.
async fn rotate_roles(
    http_req: HttpRequest,
    path: web::Path<(i64, i64)>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TeamResponse>, AppError> {
    let (room_id, team_id) = path.into_inner();

    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = TeamService::new();
            Ok(service.rotate_roles(txn, room_id, team_id).await?)
        })
    })
    .await?;

    app_state
        .realtime()
        .broadcast(room_id, RoomEvent::RoomChanged { room_id });

    Ok(web::Json(TeamResponse::from(team)))
}

/// POST /api/rooms/{room_id}/teams/{team_id}/results
///
/// Record one team's points for a finished round. Scores become visible
/// after the next recalculation.
async fn record_result(
    http_req: HttpRequest,
    path: web::Path<(i64, i64)>,
    body: ValidatedJson<RecordResultRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (room_id, team_id) = path.into_inner();
    let points = body.points;

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = ScoreService::new();
            Ok(service.record_result(txn, room_id, team_id, points).await?)
        })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{room_id}/teams")
            .route(web::get().to(list_teams))
            .route(web::post().to(create_team)),
    );
    cfg.service(
        web::resource("/{room_id}/teams/{team_id}")
            .route(web::get().to(get_team))
            .route(web::delete().to(delete_team)),
    );
    cfg.service(
        web::resource("/{room_id}/teams/{team_id}/players").route(web::post().to(add_player)),
    );
    cfg.service(
        web::resource("/{room_id}/teams/{team_id}/players/{user_id}")
            .route(web::delete().to(remove_player)),
    );
    cfg.service(
        web::resource("/{room_id}/teams/{team_id}/rotate").route(web::post().to(rotate_roles)),
    );
    cfg.service(
        web::resource("/{room_id}/teams/{team_id}/results").route(web::post().to(record_result)),
    );
}
