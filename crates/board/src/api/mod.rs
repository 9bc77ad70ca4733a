//! Board server API integration
//!
//! This module provides:
//! - The HTTP client for the board's JSON API
//! - Wire-level response types
//! - The typed failure taxonomy shared by all operations

mod client;
mod error;

pub use client::BoardClient;
pub use error::ApiError;

/// Board API response types
pub mod types {
    use serde::Deserialize;

    use crate::models::{Comment, ThreadSummary};

    /// Response from listing threads (one page)
    ///
    /// `threads` is absent when the board is empty; callers treat that as
    /// an empty page, not a failure.
    #[derive(Debug, Deserialize)]
    pub struct ThreadListResponse {
        pub threads: Option<Vec<ThreadSummary>>,
        #[serde(default)]
        pub is_limit_reached: bool,
        #[serde(default)]
        pub max_threads: usize,
        #[serde(default)]
        pub thread_count: usize,
        #[serde(default)]
        pub page_count: u32,
        #[serde(default)]
        pub max_comments: usize,
    }

    /// Response from listing a thread's comments (fetched whole, unpaged)
    #[derive(Debug, Deserialize)]
    pub struct CommentListResponse {
        pub comments: Option<Vec<Comment>>,
        #[serde(default)]
        pub is_limit_reached: bool,
        #[serde(default)]
        pub max_comments: usize,
        #[serde(default)]
        pub comment_count: usize,
    }

    /// Response from a successful login
    #[derive(Debug, Deserialize)]
    pub struct LoginResponse {
        pub token: String,
    }
}
