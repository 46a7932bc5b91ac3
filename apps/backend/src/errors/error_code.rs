//! Error codes for the blurt backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the blurt backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Access denied
    Forbidden,
    /// User not found in database
    ForbiddenUserNotFound,

    // Request Validation
    /// Invalid room ID provided
    InvalidRoomId,
    /// Invalid team ID provided
    InvalidTeamId,
    /// Invalid user ID provided
    InvalidUserId,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Room not found
    RoomNotFound,
    /// Team not found
    TeamNotFound,
    /// Player not found
    PlayerNotFound,
    /// User not found
    UserNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Team already holds the maximum number of players
    TeamFull,
    /// Player is already a member of the team
    DuplicateMember,
    /// Room name already taken
    UniqueRoomName,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Canonical string form used in HTTP responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            ErrorCode::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            ErrorCode::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::ForbiddenUserNotFound => "FORBIDDEN_USER_NOT_FOUND",
            ErrorCode::InvalidRoomId => "INVALID_ROOM_ID",
            ErrorCode::InvalidTeamId => "INVALID_TEAM_ID",
            ErrorCode::InvalidUserId => "INVALID_USER_ID",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::RoomNotFound => "ROOM_NOT_FOUND",
            ErrorCode::TeamNotFound => "TEAM_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::TeamFull => "TEAM_FULL",
            ErrorCode::DuplicateMember => "DUPLICATE_MEMBER",
            ErrorCode::UniqueRoomName => "UNIQUE_ROOM_NAME",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    const ALL: &[ErrorCode] = &[
        ErrorCode::Unauthorized,
        ErrorCode::UnauthorizedMissingBearer,
        ErrorCode::UnauthorizedInvalidJwt,
        ErrorCode::UnauthorizedExpiredJwt,
        ErrorCode::Forbidden,
        ErrorCode::ForbiddenUserNotFound,
        ErrorCode::InvalidRoomId,
        ErrorCode::InvalidTeamId,
        ErrorCode::InvalidUserId,
        ErrorCode::ValidationError,
        ErrorCode::BadRequest,
        ErrorCode::RoomNotFound,
        ErrorCode::TeamNotFound,
        ErrorCode::PlayerNotFound,
        ErrorCode::UserNotFound,
        ErrorCode::NotFound,
        ErrorCode::TeamFull,
        ErrorCode::DuplicateMember,
        ErrorCode::UniqueRoomName,
        ErrorCode::Conflict,
        ErrorCode::DbError,
        ErrorCode::DbUnavailable,
        ErrorCode::ConfigError,
        ErrorCode::Internal,
    ];

    #[test]
    fn codes_are_screaming_snake_case() {
        for code in ALL {
            let s = code.as_str();
            assert!(!s.is_empty());
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "bad code string: {s}"
            );
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in ALL {
            assert!(seen.insert(code.as_str()), "duplicate code: {code}");
        }
    }
}
