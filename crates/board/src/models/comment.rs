//! Comment model representing a message posted within a thread

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::thread::parse_timestamp;

/// A comment in a thread.
///
/// The list endpoint joins in the author's display name but leaves
/// `user_id` and `thread_id` at their zero values, so those fields are
/// defaulted rather than required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Server-assigned comment ID
    pub id: i64,
    /// Author's user ID (not populated by the list endpoint)
    #[serde(default)]
    pub user_id: i64,
    /// Author's display name
    #[serde(default)]
    pub name: String,
    /// Thread this comment belongs to (not populated by the list endpoint)
    #[serde(default)]
    pub thread_id: i64,
    /// Comment body
    pub message: String,
    /// Creation timestamp as sent by the server
    pub created_at: String,
}

impl Comment {
    /// Parsed creation time, if the server's string is parseable
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_endpoint_shape() {
        // The list endpoint only fills id, message, created_at and name.
        let json = r#"{
            "id": 7,
            "user_id": 0,
            "name": "alice",
            "thread_id": 0,
            "message": "hello",
            "created_at": "2024-11-28 10:30:00.5+09:00"
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id, 7);
        assert_eq!(comment.name, "alice");
        assert_eq!(comment.message, "hello");
        assert!(comment.created_at().is_some());
    }

    #[test]
    fn test_missing_defaulted_fields() {
        let json = r#"{"id": 1, "message": "hi", "created_at": ""}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.user_id, 0);
        assert_eq!(comment.thread_id, 0);
        assert!(comment.name.is_empty());
        assert!(comment.created_at().is_none());
    }
}
