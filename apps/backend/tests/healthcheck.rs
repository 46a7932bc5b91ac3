use actix_web::{test, web, App};
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

#[actix_web::test]
async fn health_responds_and_reports_missing_db() {
    let state = AppState::without_db(SecurityConfig::default());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "error");
    assert!(body["db_error"]
        .as_str()
        .expect("db_error should be present without a database")
        .contains("DB unavailable"));
    assert_eq!(body["migrations"], "unknown");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
}
