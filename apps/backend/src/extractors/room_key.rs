use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Room ID extracted from the route path parameter.
///
/// Validates shape only (numeric, positive); existence is checked by the
/// services against the directory.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct RoomKey(pub i64);

impl FromRequest for RoomKey {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<RoomKey, AppError> {
    let raw = req.match_info().get("room_id").ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidRoomId, "Missing room_id parameter")
    })?;

    let room_id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidRoomId, format!("Invalid room id: {raw}"))
    })?;

    if room_id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidRoomId,
            format!("Room id must be positive: {room_id}"),
        ));
    }

    Ok(RoomKey(room_id))
}
