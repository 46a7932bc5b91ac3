use actix_web::web;

pub mod health;
pub mod messages;
pub mod realtime;
pub mod rooms;
pub mod teams;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires these under scopes with additional
/// middleware (CORS, request tracing, auth extraction). For tests we
/// register the same paths without those wrappers so that endpoint behavior
/// can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.route("/health", web::get().to(health::health));

    // Room directory, team roster, message log: /api/rooms/**
    cfg.service(
        web::scope("/api/rooms")
            .configure(rooms::configure_routes)
            .configure(teams::configure_routes)
            .configure(messages::configure_routes),
    );

    // Realtime channel: /api/ws
    cfg.service(web::scope("/api/ws").configure(realtime::configure_routes));
}
