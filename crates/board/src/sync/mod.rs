//! Synchronization of local snapshots with the server
//!
//! Every trigger (bootstrap, refresh notification, page change) refetches
//! the affected collection and replaces the whole snapshot in one commit.
//! Late-arriving results from superseded fetches are discarded.

mod comments;
mod signal;
mod state;
mod threads;

pub use comments::{CommentListState, sync_comments};
pub use signal::RefreshSignal;
pub use state::{FetchTicket, PageSnapshot, PageState};
pub use threads::{ThreadListState, sync_threads};
