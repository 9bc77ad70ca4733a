//! Thread models representing a discussion topic on the board

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identity;

/// Unique identifier for a thread (server-assigned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadId(pub i64);

impl ThreadId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ThreadId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ThreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A thread as returned by the single-thread endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Server-assigned thread ID
    pub id: ThreadId,
    /// Thread title
    pub name: String,
    /// Creation timestamp as sent by the server (format not guaranteed)
    pub created_at: String,
    /// Owning user's ID. The server stores this as a string even though
    /// user IDs are numeric; the client preserves the wire type.
    #[serde(default)]
    pub owner_id: String,
}

impl Thread {
    /// Parsed creation time, if the server's string is parseable
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// A thread row in the paginated listing (includes the comment tally)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadSummary {
    /// Server-assigned thread ID
    pub id: ThreadId,
    /// Thread title
    pub name: String,
    /// Creation timestamp as sent by the server
    pub created_at: String,
    /// Owning user's ID (string on the wire, see [`Thread::owner_id`])
    #[serde(default)]
    pub owner_id: String,
    /// Number of comments in the thread, as counted by the server
    #[serde(default)]
    pub comment_count: usize,
}

impl ThreadSummary {
    /// Whether this thread belongs to the given identity.
    ///
    /// Display affordance only (e.g. enabling a delete button); the server
    /// performs the real authorization check on every mutation.
    pub fn is_owned_by(&self, identity: &Identity) -> bool {
        match identity.user_id {
            Some(user_id) => self.owner_id == user_id.to_string(),
            None => false,
        }
    }

    /// Parsed creation time, if the server's string is parseable
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Best-effort parse of the server's created-at strings.
///
/// The backend writes Go `time.Time` values through a TEXT column, so the
/// wire format varies between RFC 3339 and a space-separated variant.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f %z") {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%z") {
        return Some(ts.with_timezone(&Utc));
    }
    None
}
