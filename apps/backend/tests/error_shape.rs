//! Error responses must be RFC 7807 problem+json with a stable code and a
//! trace id, regardless of which layer raised them.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

macro_rules! build_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::without_db(SecurityConfig::default())))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn db_unavailable_is_problem_json() {
    let app = build_app!();

    let req = test::TestRequest::get().uri("/api/rooms").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/problem+json")
    );
    assert!(resp.headers().contains_key("x-trace-id"));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "DB_UNAVAILABLE");
    assert_eq!(body["status"], 500);
}

#[actix_web::test]
async fn malformed_room_id_is_rejected_before_the_directory() {
    let app = build_app!();

    let req = test::TestRequest::delete()
        .uri("/api/rooms/not-a-number")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_ROOM_ID");
}

#[actix_web::test]
async fn invalid_room_payload_is_rejected_before_the_directory() {
    let app = build_app!();

    // Empty name fails the validating parse; no database is ever touched.
    let req = test::TestRequest::post()
        .uri("/api/rooms")
        .set_json(serde_json::json!({ "name": "   ", "turn_seconds": 60 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("room name must not be empty"));
}

#[actix_web::test]
async fn out_of_range_turn_duration_is_rejected() {
    let app = build_app!();

    let req = test::TestRequest::post()
        .uri("/api/rooms")
        .set_json(serde_json::json!({ "name": "Lounge", "turn_seconds": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
