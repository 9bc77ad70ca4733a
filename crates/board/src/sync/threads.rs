//! Thread list synchronization

use log::{debug, info, warn};

use super::state::{PageSnapshot, PageState};
use crate::api::types::ThreadListResponse;
use crate::api::{ApiError, BoardClient};
use crate::models::{ThreadListMeta, ThreadSummary};

/// Snapshot state of the paginated thread listing
pub type ThreadListState = PageState<ThreadSummary, ThreadListMeta>;

/// Fetch one page of threads and commit it as the new snapshot.
///
/// Returns whether the result was committed (false means a newer fetch
/// landed first and this one was discarded). On failure the error is
/// returned and the prior snapshot is left untouched.
pub fn sync_threads(
    client: &BoardClient,
    state: &ThreadListState,
    page: u32,
) -> Result<bool, ApiError> {
    let ticket = state.begin_fetch();
    let response = match client.list_threads(page) {
        Ok(response) => response,
        Err(err) => {
            // The prior snapshot stays as-is; the caller decides what to show.
            warn!("thread fetch for page {page} failed: {err}");
            return Err(err);
        }
    };
    let snapshot = snapshot_from_response(response, page);

    let count = snapshot.items.len();
    if state.commit(ticket, snapshot) {
        info!("synced {count} thread(s) for page {page}");
        Ok(true)
    } else {
        debug!("discarded stale thread fetch for page {page}");
        Ok(false)
    }
}

fn snapshot_from_response(
    response: ThreadListResponse,
    page: u32,
) -> PageSnapshot<ThreadSummary, ThreadListMeta> {
    PageSnapshot {
        // A missing collection is an empty board, not a failure.
        items: response.threads.unwrap_or_default(),
        meta: ThreadListMeta {
            thread_count: response.thread_count,
            page_count: response.page_count,
            max_threads: response.max_threads,
            max_comments: response.max_comments,
            is_limit_reached: response.is_limit_reached,
        },
        page,
    }
}
