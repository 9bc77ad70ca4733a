//! Snapshot state with stale-fetch discard
//!
//! [`PageState`] holds the latest fetched page of a collection together
//! with its server-reported metadata. A fetch first takes a ticket from a
//! monotonic sequence, performs the network call, then commits the result.
//! A commit whose ticket is older than the last committed one is discarded,
//! so an in-flight fetch that resolves late can never overwrite a newer
//! snapshot. Commits replace the snapshot wholesale — items, metadata and
//! page in one assignment — because mixed stale state (new items, old
//! limit flag) would misrepresent server truth.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// One fetched page of a collection plus its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot<T, M> {
    /// Exactly the items of one page, as reported by the server
    pub items: Vec<T>,
    /// Capacity metadata reported with this fetch
    pub meta: M,
    /// The 1-based page these items belong to
    pub page: u32,
}

/// Order stamp for one fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

#[derive(Debug)]
struct Inner<T, M> {
    snapshot: Option<PageSnapshot<T, M>>,
    /// Ticket sequence of the committed snapshot (0 = never committed)
    committed: u64,
}

/// Shared snapshot cell for one collection
#[derive(Debug)]
pub struct PageState<T, M> {
    issued: AtomicU64,
    inner: RwLock<Inner<T, M>>,
}

impl<T: Clone, M: Clone> PageState<T, M> {
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            inner: RwLock::new(Inner {
                snapshot: None,
                committed: 0,
            }),
        }
    }

    /// Stamp a new fetch attempt. Must be taken before the network call.
    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket {
            seq: self.issued.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Atomically replace the snapshot with this fetch's result.
    ///
    /// Returns false when a newer fetch already committed; the result is
    /// then discarded and the newer snapshot kept.
    pub fn commit(&self, ticket: FetchTicket, snapshot: PageSnapshot<T, M>) -> bool {
        let mut inner = self.inner.write().unwrap();
        if ticket.seq <= inner.committed {
            return false;
        }
        inner.snapshot = Some(snapshot);
        inner.committed = ticket.seq;
        true
    }

    /// The committed snapshot, if any fetch has landed yet
    pub fn snapshot(&self) -> Option<PageSnapshot<T, M>> {
        self.inner.read().unwrap().snapshot.clone()
    }

    /// The page the committed snapshot was fetched for
    pub fn current_page(&self) -> Option<u32> {
        self.inner.read().unwrap().snapshot.as_ref().map(|s| s.page)
    }
}

impl<T: Clone, M: Clone> Default for PageState<T, M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(page: u32, items: Vec<i32>) -> PageSnapshot<i32, ()> {
        PageSnapshot {
            items,
            meta: (),
            page,
        }
    }

    #[test]
    fn test_commit_replaces_snapshot() {
        let state: PageState<i32, ()> = PageState::new();
        assert!(state.snapshot().is_none());

        let ticket = state.begin_fetch();
        assert!(state.commit(ticket, snap(1, vec![1, 2])));

        let committed = state.snapshot().unwrap();
        assert_eq!(committed.items, vec![1, 2]);
        assert_eq!(committed.page, 1);
    }

    #[test]
    fn test_stale_commit_is_discarded() {
        let state: PageState<i32, ()> = PageState::new();

        // Two fetches start; the newer one resolves first.
        let older = state.begin_fetch();
        let newer = state.begin_fetch();
        assert!(state.commit(newer, snap(2, vec![3, 4])));

        // The older fetch resolves late and must be discarded.
        assert!(!state.commit(older, snap(1, vec![1, 2])));
        let committed = state.snapshot().unwrap();
        assert_eq!(committed.page, 2);
        assert_eq!(committed.items, vec![3, 4]);
    }

    #[test]
    fn test_in_order_commits_both_apply() {
        let state: PageState<i32, ()> = PageState::new();

        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // The older fetch resolves first: it applies, then is overwritten.
        assert!(state.commit(first, snap(1, vec![1])));
        assert_eq!(state.current_page(), Some(1));

        assert!(state.commit(second, snap(2, vec![2])));
        assert_eq!(state.current_page(), Some(2));
    }

    #[test]
    fn test_commit_is_wholesale() {
        let state: PageState<i32, u32> = PageState::new();

        let t1 = state.begin_fetch();
        state.commit(
            t1,
            PageSnapshot {
                items: vec![1],
                meta: 10,
                page: 1,
            },
        );

        let t2 = state.begin_fetch();
        state.commit(
            t2,
            PageSnapshot {
                items: vec![2, 3],
                meta: 20,
                page: 2,
            },
        );

        // Items, metadata and page always move together.
        let committed = state.snapshot().unwrap();
        assert_eq!(
            (committed.items.clone(), committed.meta, committed.page),
            (vec![2, 3], 20, 2)
        );
    }
}
