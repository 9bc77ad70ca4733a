//! Comment list synchronization
//!
//! Unlike threads, a thread's comments are fetched whole — the server does
//! not paginate them — so the snapshot always represents "page 1".

use log::{debug, info, warn};

use super::state::{PageSnapshot, PageState};
use crate::api::types::CommentListResponse;
use crate::api::{ApiError, BoardClient};
use crate::models::{Comment, CommentListMeta, ThreadId};

/// Snapshot state of one thread's comment listing
pub type CommentListState = PageState<Comment, CommentListMeta>;

/// Fetch all comments of a thread and commit them as the new snapshot.
///
/// Returns whether the result was committed (false means a newer fetch
/// landed first). On failure the prior snapshot is left untouched.
pub fn sync_comments(
    client: &BoardClient,
    state: &CommentListState,
    thread_id: ThreadId,
) -> Result<bool, ApiError> {
    let ticket = state.begin_fetch();
    let response = match client.list_comments(thread_id) {
        Ok(response) => response,
        Err(err) => {
            warn!("comment fetch for thread {thread_id} failed: {err}");
            return Err(err);
        }
    };
    let snapshot = snapshot_from_response(response);

    let count = snapshot.items.len();
    if state.commit(ticket, snapshot) {
        info!("synced {count} comment(s) for thread {thread_id}");
        Ok(true)
    } else {
        debug!("discarded stale comment fetch for thread {thread_id}");
        Ok(false)
    }
}

fn snapshot_from_response(response: CommentListResponse) -> PageSnapshot<Comment, CommentListMeta> {
    PageSnapshot {
        // A thread with no comments answers with a missing collection.
        items: response.comments.unwrap_or_default(),
        meta: CommentListMeta {
            comment_count: response.comment_count,
            max_comments: response.max_comments,
            is_limit_reached: response.is_limit_reached,
        },
        page: 1,
    }
}
