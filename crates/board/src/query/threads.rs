//! Thread filtering

use crate::models::ThreadSummary;

/// Filter a fetched page of threads by a search keyword.
///
/// Case-insensitive substring match against the thread name; an empty
/// keyword returns the page unchanged. A pure function of its inputs —
/// recompute it whenever the snapshot or the keyword changes.
///
/// This intentionally searches only the given page's items: the server
/// paginates the listing, so keyword search is local to the fetched page,
/// not global to the collection.
pub fn filter_threads(threads: &[ThreadSummary], keyword: &str) -> Vec<ThreadSummary> {
    if keyword.is_empty() {
        return threads.to_vec();
    }

    let needle = keyword.to_lowercase();
    threads
        .iter()
        .filter(|thread| thread.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
