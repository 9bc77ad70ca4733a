//! High-level facade over session, synchronization, and actions
//!
//! A front-end constructs one [`BoardService`] per session. The service
//! owns the only mutable shared state — the thread-list snapshot and the
//! session identity — and every mutation of either goes through it. Thread
//! detail pages get their own [`ThreadView`] with an independent comment
//! snapshot and refresh signal, mirroring the per-page triggers of the
//! original frontend.

use anyhow::Result;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::actions::{ActionError, ActionHandler, CreateOutcome, DeleteOutcome};
use crate::api::{ApiError, BoardClient};
use crate::auth::SessionStore;
use crate::models::{
    Comment, CommentListMeta, Identity, Thread, ThreadId, ThreadListMeta, ThreadSummary,
};
use crate::pagination::{PageControl, page_controls};
use crate::query::filter_threads;
use crate::sync::{
    CommentListState, PageSnapshot, RefreshSignal, ThreadListState, sync_comments, sync_threads,
};

/// Client-side session over the board: identity, thread listing, mutations
pub struct BoardService {
    client: Arc<BoardClient>,
    session: Arc<SessionStore>,
    handler: ActionHandler,
    refresh: Arc<RefreshSignal>,
    identity: RwLock<Identity>,
    threads: ThreadListState,
    current_page: AtomicU32,
    synced_generation: AtomicU64,
}

impl BoardService {
    /// Bootstrap a session against `base_url` using the default session
    /// file. The identity is resolved here, once; a missing or malformed
    /// token yields an anonymous session, never an error.
    pub fn new(base_url: &str) -> Result<Self> {
        let session = SessionStore::new()?;
        Self::with_session(base_url, session)
    }

    /// Bootstrap with an explicit session store (used by tests and
    /// embedders that manage their own config location)
    pub fn with_session(base_url: &str, session: SessionStore) -> Result<Self> {
        let client = Arc::new(BoardClient::new(base_url)?);
        let session = Arc::new(session);
        let refresh = Arc::new(RefreshSignal::new());
        let identity = session.identity();
        let handler = ActionHandler::new(
            Arc::clone(&client),
            Arc::clone(&session),
            Arc::clone(&refresh),
        );

        Ok(Self {
            client,
            session,
            handler,
            refresh,
            identity: RwLock::new(identity),
            threads: ThreadListState::new(),
            current_page: AtomicU32::new(1),
            synced_generation: AtomicU64::new(0),
        })
    }

    /// The session's identity (anonymous when signed out)
    pub fn identity(&self) -> Identity {
        self.identity.read().unwrap().clone()
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Exchange credentials for a token, persist it, and replace the
    /// session identity wholesale.
    ///
    /// A 401 surfaces as [`ApiError::Unauthorized`] inside the error chain
    /// so callers can show a credentials message instead of a generic one.
    pub fn login(&self, name: &str, password: &str) -> Result<Identity> {
        let token = self.client.login(name, password)?;
        self.session.save(&token)?;

        let identity = crate::auth::resolve_identity(Some(&token));
        *self.identity.write().unwrap() = identity.clone();
        Ok(identity)
    }

    /// Register a new user. Does not sign in.
    pub fn register(&self, name: &str, password: &str) -> Result<(), ApiError> {
        self.client.register(name, password)
    }

    /// Drop the persisted session and become anonymous
    pub fn logout(&self) -> Result<()> {
        self.session.clear()?;
        *self.identity.write().unwrap() = Identity::anonymous();
        Ok(())
    }

    // ========================================================================
    // Thread listing
    // ========================================================================

    /// Fetch the current page and commit it as the new snapshot
    pub fn sync_threads(&self) -> Result<bool, ApiError> {
        let page = self.current_page.load(Ordering::SeqCst);
        let committed = sync_threads(&self.client, &self.threads, page)?;
        self.synced_generation
            .store(self.refresh.generation(), Ordering::SeqCst);
        Ok(committed)
    }

    /// Navigate to a page: the authoritative page number is updated and
    /// the fetch for it initiated in the same step, so the displayed page
    /// and the in-flight fetch never diverge. Out-of-range targets clamp.
    pub fn change_page(&self, new_page: u32) -> Result<bool, ApiError> {
        let page_count = self
            .threads_meta()
            .map(|meta| meta.page_count)
            .unwrap_or(0);
        let target = match page_count {
            0 => new_page.max(1),
            count => new_page.clamp(1, count),
        };

        self.current_page.store(target, Ordering::SeqCst);
        self.sync_threads()
    }

    /// The page the listing currently shows
    pub fn current_page(&self) -> u32 {
        self.current_page.load(Ordering::SeqCst)
    }

    /// The last committed listing snapshot, if any fetch has landed
    pub fn threads_snapshot(&self) -> Option<PageSnapshot<ThreadSummary, ThreadListMeta>> {
        self.threads.snapshot()
    }

    /// Capacity metadata of the last committed snapshot
    pub fn threads_meta(&self) -> Option<ThreadListMeta> {
        self.threads.snapshot().map(|snapshot| snapshot.meta)
    }

    /// The current page's threads, filtered by `keyword`.
    ///
    /// Purely local: never triggers a fetch. Search is local to the
    /// fetched page (see [`filter_threads`]).
    pub fn visible_threads(&self, keyword: &str) -> Vec<ThreadSummary> {
        match self.threads.snapshot() {
            Some(snapshot) => filter_threads(&snapshot.items, keyword),
            None => Vec::new(),
        }
    }

    /// Pagination controls for the last committed snapshot
    pub fn page_controls(&self) -> Vec<PageControl> {
        let page_count = self
            .threads_meta()
            .map(|meta| meta.page_count)
            .unwrap_or(0);
        page_controls(self.current_page(), page_count)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a thread, then resynchronize the listing exactly once if the
    /// mutation was applied
    pub fn create_thread(&self, name: &str) -> Result<CreateOutcome, ActionError> {
        let outcome = self.handler.create_thread(name)?;
        self.resync_pending()?;
        Ok(outcome)
    }

    /// Delete a thread, then resynchronize the listing exactly once if the
    /// mutation was applied
    pub fn delete_thread(&self, id: ThreadId) -> Result<DeleteOutcome, ActionError> {
        let outcome = self.handler.delete_thread(id)?;
        self.resync_pending()?;
        Ok(outcome)
    }

    /// Refetch the current page when (and only when) the refresh signal
    /// moved since the last committed synchronization
    fn resync_pending(&self) -> Result<(), ActionError> {
        if self.refresh.generation() != self.synced_generation.load(Ordering::SeqCst) {
            self.sync_threads().map_err(ActionError::Api)?;
        }
        Ok(())
    }

    // ========================================================================
    // Thread detail
    // ========================================================================

    /// Fetch a thread and open a view over its comments.
    ///
    /// # Errors
    /// [`ApiError::NotFound`] when the thread does not exist; callers
    /// navigate away instead of rendering an empty thread.
    pub fn open_thread(&self, id: ThreadId) -> Result<ThreadView, ApiError> {
        let thread = self.client.get_thread(id)?;
        Ok(ThreadView::new(
            Arc::clone(&self.client),
            Arc::clone(&self.session),
            thread,
        ))
    }
}

/// One thread's detail page: the thread record plus its comment snapshot.
///
/// Has its own refresh signal, so posting a comment resynchronizes the
/// comment list without touching the thread listing.
#[derive(Debug)]
pub struct ThreadView {
    client: Arc<BoardClient>,
    handler: ActionHandler,
    refresh: Arc<RefreshSignal>,
    thread: Thread,
    comments: CommentListState,
    synced_generation: AtomicU64,
}

impl ThreadView {
    fn new(client: Arc<BoardClient>, session: Arc<SessionStore>, thread: Thread) -> Self {
        let refresh = Arc::new(RefreshSignal::new());
        let handler = ActionHandler::new(Arc::clone(&client), session, Arc::clone(&refresh));

        Self {
            client,
            handler,
            refresh,
            thread,
            comments: CommentListState::new(),
            synced_generation: AtomicU64::new(0),
        }
    }

    /// The thread this view shows
    pub fn thread(&self) -> &Thread {
        &self.thread
    }

    /// Fetch the thread's comments and commit them as the new snapshot
    pub fn sync(&self) -> Result<bool, ApiError> {
        let committed = sync_comments(&self.client, &self.comments, self.thread.id)?;
        self.synced_generation
            .store(self.refresh.generation(), Ordering::SeqCst);
        Ok(committed)
    }

    /// The last committed comments (newest first, as the server orders)
    pub fn comments(&self) -> Vec<Comment> {
        self.comments
            .snapshot()
            .map(|snapshot| snapshot.items)
            .unwrap_or_default()
    }

    /// Capacity metadata of the last committed snapshot
    pub fn meta(&self) -> Option<CommentListMeta> {
        self.comments.snapshot().map(|snapshot| snapshot.meta)
    }

    /// Post a comment, then resynchronize the comment list exactly once
    /// if the mutation was applied
    pub fn post_comment(&self, message: &str) -> Result<CreateOutcome, ActionError> {
        let outcome = self.handler.create_comment(self.thread.id, message)?;
        if self.refresh.generation() != self.synced_generation.load(Ordering::SeqCst) {
            self.sync().map_err(ActionError::Api)?;
        }
        Ok(outcome)
    }
}
