//! Capacity metadata reported alongside each fetched collection
//!
//! The server enforces a ceiling on the total number of threads and on
//! comments per thread. Each collection kind carries its own metadata;
//! `is_limit_reached` always refers to the collection it came with, never
//! to "this page is full".

/// Metadata reported with a page of the thread listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadListMeta {
    /// Total number of threads on the board
    pub thread_count: usize,
    /// Total number of listing pages
    pub page_count: u32,
    /// Server-side ceiling on the total thread count
    pub max_threads: usize,
    /// Server-side ceiling on comments per thread (reported here so the
    /// listing can render per-thread comment tallies against it)
    pub max_comments: usize,
    /// Whether the board has reached its thread ceiling
    pub is_limit_reached: bool,
}

/// Metadata reported with a thread's comment listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentListMeta {
    /// Number of comments in the thread
    pub comment_count: usize,
    /// Server-side ceiling on comments per thread
    pub max_comments: usize,
    /// Whether this thread has reached its comment ceiling
    pub is_limit_reached: bool,
}
