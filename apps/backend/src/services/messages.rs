//! Message log service. Append-only; messages are immutable once stored.

use sea_orm::DatabaseTransaction;

use crate::errors::domain::DomainError;
use crate::repos::messages::{self, ChatMessage};
use crate::repos::rooms;

pub const MAX_MESSAGE_LEN: usize = 2000;

const DEFAULT_PAGE: u64 = 50;
const MAX_PAGE: u64 = 200;

fn validate_content(content: &str) -> Result<&str, DomainError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("message content must not be empty"));
    }
    if trimmed.chars().count() > MAX_MESSAGE_LEN {
        return Err(DomainError::validation(format!(
            "message content must be at most {MAX_MESSAGE_LEN} characters"
        )));
    }
    Ok(trimmed)
}

/// Message log domain service.
pub struct MessageService;

impl MessageService {
    pub fn new() -> Self {
        Self
    }

    pub async fn post(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
        author_id: i64,
        content: &str,
    ) -> Result<ChatMessage, DomainError> {
        let content = validate_content(content)?;
        rooms::require_room(txn, room_id).await?;
        messages::append(txn, room_id, author_id, content).await
    }

    /// Newest messages first. `limit` defaults to 50 and is capped at 200.
    pub async fn recent(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
        limit: Option<u64>,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        rooms::require_room(txn, room_id).await?;
        let limit = limit.unwrap_or(DEFAULT_PAGE).min(MAX_PAGE);
        messages::list_recent(txn, room_id, limit).await
    }
}

impl Default for MessageService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::validate_content;

    #[test]
    fn content_is_trimmed() {
        assert_eq!(validate_content("  hi  ").unwrap(), "hi");
    }

    #[test]
    fn content_rejects_empty() {
        assert!(validate_content("   ").is_err());
    }

    #[test]
    fn content_rejects_overlong() {
        let long = "x".repeat(2001);
        assert!(validate_content(&long).is_err());
        let max = "x".repeat(2000);
        assert!(validate_content(&max).is_ok());
    }
}
