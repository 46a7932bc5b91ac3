use actix::prelude::*;
use dashmap::DashMap;
use uuid::Uuid;

use crate::ws::protocol::MessageView;

/// Event fanned out to every session subscribed to a room.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub enum RoomEvent {
    Chat { room_id: i64, message: MessageView },
    RoomChanged { room_id: i64 },
}

/// In-process registry of room subscribers.
///
/// Sessions register a recipient per subscribed room and receive every event
/// broadcast to that room until they unregister (or drop, in which case
/// `do_send` silently discards).
#[derive(Default)]
pub struct RoomRegistry {
    sessions: DashMap<i64, DashMap<Uuid, Recipient<RoomEvent>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn register(&self, room_id: i64, recipient: Recipient<RoomEvent>) -> Uuid {
        let token = Uuid::new_v4();
        let entry = self.sessions.entry(room_id).or_default();
        entry.insert(token, recipient);
        token
    }

    pub fn unregister(&self, room_id: i64, token: Uuid) {
        if let Some(entry) = self.sessions.get(&room_id) {
            entry.remove(&token);
            if entry.is_empty() {
                drop(entry);
                self.sessions.remove_if(&room_id, |_, subs| subs.is_empty());
            }
        }
    }

    pub fn broadcast(&self, room_id: i64, event: RoomEvent) {
        if let Some(entry) = self.sessions.get(&room_id) {
            for recipient in entry.iter() {
                let _ = recipient.value().do_send(event.clone());
            }
        }
    }

    pub fn subscriber_count(&self, room_id: i64) -> usize {
        self.sessions.get(&room_id).map_or(0, |entry| entry.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use actix::prelude::*;

    use super::{RoomEvent, RoomRegistry};

    struct Collector {
        seen: Arc<Mutex<Vec<i64>>>,
    }

    impl Actor for Collector {
        type Context = Context<Self>;
    }

    impl Handler<RoomEvent> for Collector {
        type Result = ();

        fn handle(&mut self, msg: RoomEvent, _ctx: &mut Self::Context) {
            let room_id = match msg {
                RoomEvent::Chat { room_id, .. } => room_id,
                RoomEvent::RoomChanged { room_id } => room_id,
            };
            self.seen.lock().unwrap().push(room_id);
        }
    }

    #[test]
    fn broadcast_reaches_only_the_rooms_subscribers() {
        System::new().block_on(async {
            let registry = RoomRegistry::new();

            let seen_a = Arc::new(Mutex::new(Vec::new()));
            let seen_b = Arc::new(Mutex::new(Vec::new()));

            let addr_a = Collector {
                seen: seen_a.clone(),
            }
            .start();
            let addr_b = Collector {
                seen: seen_b.clone(),
            }
            .start();

            registry.register(1, addr_a.recipient());
            registry.register(2, addr_b.recipient());

            registry.broadcast(1, RoomEvent::RoomChanged { room_id: 1 });
            actix::clock::sleep(Duration::from_millis(20)).await;

            assert_eq!(*seen_a.lock().unwrap(), vec![1]);
            assert!(seen_b.lock().unwrap().is_empty());
        });
    }

    #[test]
    fn unregister_drops_the_subscription() {
        System::new().block_on(async {
            let registry = RoomRegistry::new();
            let seen = Arc::new(Mutex::new(Vec::new()));
            let addr = Collector { seen: seen.clone() }.start();

            let token = registry.register(7, addr.recipient());
            assert_eq!(registry.subscriber_count(7), 1);

            registry.unregister(7, token);
            assert_eq!(registry.subscriber_count(7), 0);

            registry.broadcast(7, RoomEvent::RoomChanged { room_id: 7 });
            actix::clock::sleep(Duration::from_millis(20)).await;
            assert!(seen.lock().unwrap().is_empty());
        });
    }
}
