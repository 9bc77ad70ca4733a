//! Failure taxonomy for board API operations
//!
//! Every operation converts HTTP statuses into one of these variants at
//! the call boundary; nothing above this layer inspects raw status codes.

use thiserror::Error;

/// Typed outcome of a failed API operation
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 on a single-resource fetch or delete. Callers navigate away
    /// (fetch) or treat the resource as already gone (delete) — never
    /// render it as an empty collection.
    #[error("resource not found")]
    NotFound,

    /// 403 on a create: the server-side capacity ceiling is reached.
    /// An expected outcome, distinct from a generic failure.
    #[error("capacity limit reached")]
    CapacityReached,

    /// 401: credentials rejected, or the bearer token was refused
    #[error("invalid name or password")]
    Unauthorized,

    /// 409 on register: the user name is already taken
    #[error("name already used")]
    NameTaken,

    /// 5xx from the server
    #[error("server error (status {0})")]
    Server(u16),

    /// Any other unexpected non-success status
    #[error("unexpected status {0}")]
    Status(u16),

    /// Connection-level failure: network unreachable, timeout, TLS, ...
    #[error("transport failure")]
    Transport(#[source] Box<ureq::Error>),

    /// The server answered 2xx but the body was not the expected JSON
    #[error("malformed response body: {0}")]
    Body(String),
}

impl ApiError {
    /// Classify a non-success HTTP status
    pub(crate) fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            403 => Self::CapacityReached,
            401 => Self::Unauthorized,
            409 => Self::NameTaken,
            500..=599 => Self::Server(status),
            other => Self::Status(other),
        }
    }

    pub(crate) fn transport(err: ureq::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
