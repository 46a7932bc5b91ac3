//! Realtime channel route: upgrades an authenticated request to a
//! WebSocket session.

use actix_web::web;

use crate::ws::session;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(session::upgrade)));
}
