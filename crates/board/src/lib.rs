//! Board crate - client engine for the bulletin board
//!
//! This crate provides platform-independent client functionality including:
//! - Domain models (ThreadSummary, Comment, Identity)
//! - HTTP API client for the board server
//! - Bearer-token identity derivation and session persistence
//! - Snapshot synchronization with stale-fetch discard
//! - Query and pagination helpers for UI consumption
//! - Action handlers for mutations (create/delete thread, post comment)
//!
//! This crate has zero UI dependencies. The board server owns all data;
//! the client never keeps a durable copy — every list is refetched on each
//! synchronization trigger and replaces the previous snapshot wholesale.

pub mod actions;
pub mod api;
pub mod auth;
pub mod models;
pub mod pagination;
pub mod query;
pub mod service;
pub mod sync;

pub use actions::{ActionError, ActionHandler, CreateOutcome, DeleteOutcome};
pub use api::{ApiError, BoardClient};
pub use auth::{SessionStore, TokenClaims, TokenError, decode_claims, resolve_identity};
pub use models::{
    Comment, CommentListMeta, Identity, Thread, ThreadId, ThreadListMeta, ThreadSummary,
};
pub use pagination::{PageControl, page_controls, page_controls_with};
pub use query::filter_threads;
pub use service::{BoardService, ThreadView};
pub use sync::{
    CommentListState, FetchTicket, PageSnapshot, PageState, RefreshSignal, ThreadListState,
    sync_comments, sync_threads,
};
