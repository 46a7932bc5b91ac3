use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;

use crate::repos::messages::ChatMessage;

pub const PROTOCOL_VERSION: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Topic {
    #[serde(rename_all = "snake_case")]
    Room { id: i64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    Hello { protocol: i32 },
    Subscribe { topic: Topic },
    Unsubscribe { topic: Topic },
    Chat { topic: Topic, content: String },
}

/// Wire form of a stored chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageView {
    pub id: i64,
    pub room_id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: String,
}

impl From<ChatMessage> for MessageView {
    fn from(msg: ChatMessage) -> Self {
        let created_at = msg
            .created_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| msg.created_at.to_string());
        Self {
            id: msg.id,
            room_id: msg.room_id,
            author_id: msg.author_id,
            content: msg.content,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    HelloAck {
        protocol: i32,
        user_id: i64,
    },

    Ack {
        message: String,
    },

    /// A chat message was persisted and is now fanned out to the room.
    Chat {
        topic: Topic,
        message: MessageView,
    },

    /// Room or team state changed; subscribers should refetch.
    RoomChanged {
        room_id: i64,
    },

    Error {
        code: ErrorCode,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadProtocol,
    BadTopic,
    BadRequest,
    Forbidden,
}

#[cfg(test)]
mod tests {
    use super::{ClientMsg, ErrorCode, ServerMsg, Topic};

    #[test]
    fn client_subscribe_wire_format() {
        let json = r#"{"type":"subscribe","topic":{"kind":"room","id":5}}"#;
        let msg: ClientMsg = serde_json::from_str(json).unwrap();
        match msg {
            ClientMsg::Subscribe {
                topic: Topic::Room { id },
            } => assert_eq!(id, 5),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn client_chat_wire_format() {
        let json = r#"{"type":"chat","topic":{"kind":"room","id":2},"content":"guessed it!"}"#;
        let msg: ClientMsg = serde_json::from_str(json).unwrap();
        match msg {
            ClientMsg::Chat {
                topic: Topic::Room { id },
                content,
            } => {
                assert_eq!(id, 2);
                assert_eq!(content, "guessed it!");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn server_error_uses_snake_case_tags() {
        let msg = ServerMsg::Error {
            code: ErrorCode::BadProtocol,
            message: "nope".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["code"], "bad_protocol");
    }

    #[test]
    fn server_room_changed_round_trips() {
        let msg = ServerMsg::RoomChanged { room_id: 9 };
        let json = serde_json::to_string(&msg).unwrap();
        let back: ServerMsg = serde_json::from_str(&json).unwrap();
        match back {
            ServerMsg::RoomChanged { room_id } => assert_eq!(room_id, 9),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
