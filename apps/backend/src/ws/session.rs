use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::extractors::current_user::CurrentUser;
use crate::repos::rooms;
use crate::services::messages::MessageService;
use crate::state::app_state::AppState;
use crate::ws::hub::{RoomEvent, RoomRegistry};
use crate::ws::protocol::{ClientMsg, ErrorCode, MessageView, ServerMsg, Topic, PROTOCOL_VERSION};
use crate::AppError;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

/// Upgrade an authenticated request to a realtime session.
pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn_id = Uuid::new_v4();
    let registry = app_state.realtime();

    let session = WsSession::new(conn_id, current_user, app_state, registry);
    ws::start(session, &req, stream)
}

pub struct WsSession {
    conn_id: Uuid,
    user: CurrentUser,
    app_state: web::Data<AppState>,
    registry: Arc<RoomRegistry>,

    /// Registry token per subscribed room.
    subscriptions: HashMap<i64, Uuid>,

    last_heartbeat: Instant,
    hello_done: bool,
}

impl WsSession {
    fn new(
        conn_id: Uuid,
        user: CurrentUser,
        app_state: web::Data<AppState>,
        registry: Arc<RoomRegistry>,
    ) -> Self {
        Self {
            conn_id,
            user,
            app_state,
            registry,
            subscriptions: HashMap::new(),
            last_heartbeat: Instant::now(),
            hello_done: false,
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error_and_close(
        &self,
        ctx: &mut ws::WebsocketContext<Self>,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        let msg = ServerMsg::Error {
            code,
            message: message.into(),
        };
        Self::send_json(ctx, &msg);
        ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
        ctx.stop();
    }

    fn start_heartbeat(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(
                    conn_id = %actor.conn_id,
                    user_id = actor.user.id,
                    "[WS SESSION] heartbeat timed out"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    fn handle_client_msg(&mut self, cmd: ClientMsg, ctx: &mut ws::WebsocketContext<Self>) {
        match cmd {
            ClientMsg::Hello { protocol } => {
                if protocol != PROTOCOL_VERSION {
                    self.send_error_and_close(
                        ctx,
                        ErrorCode::BadProtocol,
                        "Unsupported protocol version",
                    );
                    return;
                }
                self.hello_done = true;
                Self::send_json(
                    ctx,
                    &ServerMsg::HelloAck {
                        protocol: PROTOCOL_VERSION,
                        user_id: self.user.id,
                    },
                );
            }

            ClientMsg::Subscribe { topic } => {
                if !self.hello_done {
                    self.send_error_and_close(ctx, ErrorCode::BadRequest, "Must send hello first");
                    return;
                }

                let Topic::Room { id: room_id } = topic;

                if self.subscriptions.contains_key(&room_id) {
                    Self::send_json(
                        ctx,
                        &ServerMsg::Ack {
                            message: "subscribed".to_string(),
                        },
                    );
                    return;
                }

                let app_state = self.app_state.clone();

                ctx.spawn(
                    async move {
                        with_txn(None, &app_state, |txn| {
                            Box::pin(async move {
                                rooms::require_room(txn, room_id).await.map_err(AppError::from)
                            })
                        })
                        .await
                    }
                    .into_actor(self)
                    .map(move |res, actor, ctx| match res {
                        Ok(_room) => {
                            let recipient = ctx.address().recipient::<RoomEvent>();
                            let token = actor.registry.register(room_id, recipient);
                            actor.subscriptions.insert(room_id, token);

                            Self::send_json(
                                ctx,
                                &ServerMsg::Ack {
                                    message: "subscribed".to_string(),
                                },
                            );
                        }
                        Err(err) => match err {
                            AppError::NotFound { .. } => {
                                Self::send_json(
                                    ctx,
                                    &ServerMsg::Error {
                                        code: ErrorCode::BadTopic,
                                        message: format!("Room {room_id} does not exist"),
                                    },
                                );
                            }
                            _ => {
                                tracing::error!(
                                    ?err,
                                    room_id,
                                    conn_id = %actor.conn_id,
                                    "[WS SESSION] subscribe failed"
                                );
                                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                                ctx.stop();
                            }
                        },
                    }),
                );
            }

            ClientMsg::Unsubscribe { topic } => {
                if !self.hello_done {
                    self.send_error_and_close(ctx, ErrorCode::BadRequest, "Must send hello first");
                    return;
                }
                let Topic::Room { id: room_id } = topic;
                if let Some(token) = self.subscriptions.remove(&room_id) {
                    self.registry.unregister(room_id, token);
                }
                Self::send_json(
                    ctx,
                    &ServerMsg::Ack {
                        message: "unsubscribed".to_string(),
                    },
                );
            }

            ClientMsg::Chat { topic, content } => {
                if !self.hello_done {
                    self.send_error_and_close(ctx, ErrorCode::BadRequest, "Must send hello first");
                    return;
                }

                let Topic::Room { id: room_id } = topic;

                if !self.subscriptions.contains_key(&room_id) {
                    Self::send_json(
                        ctx,
                        &ServerMsg::Error {
                            code: ErrorCode::BadTopic,
                            message: "Not subscribed to this room".to_string(),
                        },
                    );
                    return;
                }

                let app_state = self.app_state.clone();
                let author_id = self.user.id;

                ctx.spawn(
                    // Persist through the message log first; only a stored
                    // message is fanned out.
                    async move {
                        with_txn(None, &app_state, |txn| {
                            Box::pin(async move {
                                let service = MessageService::new();
                                Ok(service.post(txn, room_id, author_id, &content).await?)
                            })
                        })
                        .await
                    }
                    .into_actor(self)
                    .map(move |res, actor, ctx| match res {
                        Ok(message) => {
                            actor.registry.broadcast(
                                room_id,
                                RoomEvent::Chat {
                                    room_id,
                                    message: MessageView::from(message),
                                },
                            );
                        }
                        Err(err) => match err {
                            AppError::Validation { .. } | AppError::BadRequest { .. } => {
                                Self::send_json(
                                    ctx,
                                    &ServerMsg::Error {
                                        code: ErrorCode::BadRequest,
                                        message: err.to_string(),
                                    },
                                );
                            }
                            AppError::NotFound { .. } => {
                                Self::send_json(
                                    ctx,
                                    &ServerMsg::Error {
                                        code: ErrorCode::BadTopic,
                                        message: err.to_string(),
                                    },
                                );
                            }
                            _ => {
                                tracing::error!(
                                    ?err,
                                    room_id,
                                    conn_id = %actor.conn_id,
                                    "[WS SESSION] chat persist failed"
                                );
                                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                                ctx.stop();
                            }
                        },
                    }),
                );
            }
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            conn_id = %self.conn_id,
            user_id = self.user.id,
            "[WS SESSION] started"
        );
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        for (room_id, token) in self.subscriptions.drain() {
            self.registry.unregister(room_id, token);
        }
        info!(
            conn_id = %self.conn_id,
            user_id = self.user.id,
            "[WS SESSION] stopped"
        );
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                let parsed: Result<ClientMsg, _> = serde_json::from_str(&text);
                let Ok(cmd) = parsed else {
                    self.send_error_and_close(ctx, ErrorCode::BadRequest, "Malformed JSON");
                    return;
                };

                self.handle_client_msg(cmd, ctx);
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.send_error_and_close(ctx, ErrorCode::BadRequest, "Binary not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    conn_id = %self.conn_id,
                    user_id = self.user.id,
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<RoomEvent> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: RoomEvent, ctx: &mut Self::Context) -> Self::Result {
        match msg {
            RoomEvent::Chat { room_id, message } => {
                Self::send_json(
                    ctx,
                    &ServerMsg::Chat {
                        topic: Topic::Room { id: room_id },
                        message,
                    },
                );
            }
            RoomEvent::RoomChanged { room_id } => {
                Self::send_json(ctx, &ServerMsg::RoomChanged { room_id });
            }
        }
    }
}
