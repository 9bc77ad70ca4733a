//! Action handler for board mutations
//!
//! Coordinates authorization checks, server writes, and refresh
//! signalling. The server stays the source of truth: a mutation notifies
//! the refresh signal only after the server accepted it — exactly once —
//! and the following synchronization replaces the whole snapshot.

use log::{info, warn};
use std::sync::Arc;
use thiserror::Error;

use crate::api::{ApiError, BoardClient};
use crate::auth::SessionStore;
use crate::models::ThreadId;
use crate::sync::RefreshSignal;

/// Failure of a mutation
#[derive(Debug, Error)]
pub enum ActionError {
    /// No stored session token; the mutation was never sent.
    #[error("not signed in")]
    Unauthenticated,

    /// The server or transport failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result of a create that reached the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The resource was created; a resynchronization was signalled
    Created,
    /// The server-side capacity ceiling is reached; nothing was created
    CapacityReached,
}

/// Result of a delete that reached the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The thread was deleted; a resynchronization was signalled
    Deleted,
    /// The thread was already gone
    NotFound,
    /// The server failed to delete it
    ServerError,
}

/// Handler for thread and comment mutations
#[derive(Debug)]
pub struct ActionHandler {
    client: Arc<BoardClient>,
    session: Arc<SessionStore>,
    refresh: Arc<RefreshSignal>,
}

impl ActionHandler {
    pub fn new(
        client: Arc<BoardClient>,
        session: Arc<SessionStore>,
        refresh: Arc<RefreshSignal>,
    ) -> Self {
        Self {
            client,
            session,
            refresh,
        }
    }

    /// The bearer token, or the local unauthenticated short-circuit
    fn bearer_token(&self) -> Result<String, ActionError> {
        match self.session.token() {
            Some(token) => Ok(token),
            None => {
                warn!("mutation requires a signed-in session; nothing sent");
                Err(ActionError::Unauthenticated)
            }
        }
    }

    /// Create a thread.
    ///
    /// Anonymous sessions fail locally with [`ActionError::Unauthenticated`]
    /// before any network call. A 403 from the server is the expected
    /// [`CreateOutcome::CapacityReached`], not an error, and does not
    /// trigger a resynchronization.
    pub fn create_thread(&self, name: &str) -> Result<CreateOutcome, ActionError> {
        let token = self.bearer_token()?;

        match self.client.create_thread(name, &token) {
            Ok(()) => {
                info!("created thread {name:?}");
                self.refresh.notify();
                Ok(CreateOutcome::Created)
            }
            Err(ApiError::CapacityReached) => {
                warn!("thread limit reached; create rejected");
                Ok(CreateOutcome::CapacityReached)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Post a comment to a thread. Same outcome policy as
    /// [`create_thread`](Self::create_thread).
    pub fn create_comment(
        &self,
        thread_id: ThreadId,
        message: &str,
    ) -> Result<CreateOutcome, ActionError> {
        let token = self.bearer_token()?;

        match self.client.create_comment(thread_id, message, &token) {
            Ok(()) => {
                info!("posted comment to thread {thread_id}");
                self.refresh.notify();
                Ok(CreateOutcome::Created)
            }
            Err(ApiError::CapacityReached) => {
                warn!("comment limit reached for thread {thread_id}; post rejected");
                Ok(CreateOutcome::CapacityReached)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Delete a thread.
    ///
    /// 404 ("already gone") and 500 ("server failure") are expected
    /// non-fatal outcomes: both are logged and reported, neither triggers
    /// a resynchronization. The delete endpoint takes no token; the server
    /// is assumed to perform its own ownership check.
    pub fn delete_thread(&self, id: ThreadId) -> Result<DeleteOutcome, ActionError> {
        match self.client.delete_thread(id) {
            Ok(()) => {
                info!("deleted thread {id}");
                self.refresh.notify();
                Ok(DeleteOutcome::Deleted)
            }
            Err(ApiError::NotFound) => {
                warn!("thread {id} not found; nothing to delete");
                Ok(DeleteOutcome::NotFound)
            }
            Err(ApiError::Server(status)) => {
                warn!("server failed to delete thread {id} (status {status})");
                Ok(DeleteOutcome::ServerError)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// The signal mutations notify on success
    pub fn refresh_signal(&self) -> &RefreshSignal {
        &self.refresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Network-reaching paths are covered by the integration tests against
    // a mock server; here we cover the local short-circuit.

    #[test]
    fn test_anonymous_create_short_circuits_locally() {
        let dir = TempDir::new().unwrap();
        let client = Arc::new(BoardClient::new("http://127.0.0.1:9").unwrap());
        let session = Arc::new(SessionStore::at(dir.path().join("session.json")));
        let refresh = Arc::new(RefreshSignal::new());
        let handler = ActionHandler::new(client, session, Arc::clone(&refresh));

        let err = handler.create_thread("new thread").unwrap_err();
        assert!(matches!(err, ActionError::Unauthenticated));

        let err = handler.create_comment(ThreadId::new(1), "hello").unwrap_err();
        assert!(matches!(err, ActionError::Unauthenticated));

        // No mutation happened, so nothing signalled a refresh.
        assert_eq!(refresh.generation(), 0);
    }
}
