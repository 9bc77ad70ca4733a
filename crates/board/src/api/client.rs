//! Board API HTTP client
//!
//! Provides methods for every operation the board server exposes.
//! Uses synchronous HTTP (ureq) to be executor-agnostic; callers own any
//! scheduling. Authenticated writes attach the bearer token; reads are
//! anonymous, matching the server contract.

use anyhow::{Context, Result, ensure};
use log::debug;
use serde_json::json;
use url::Url;

use super::error::ApiError;
use super::types::{CommentListResponse, LoginResponse, ThreadListResponse};
use crate::models::{Thread, ThreadId};

/// HTTP client for the board API
#[derive(Debug)]
pub struct BoardClient {
    base_url: String,
}

impl BoardClient {
    /// Default server address of a locally running board backend
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";

    /// Create a client for the server at `base_url` (scheme + authority,
    /// e.g. `http://localhost:8080`; the `/api` prefix is added per call).
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).context("invalid base URL")?;
        ensure!(
            parsed.scheme() == "http" || parsed.scheme() == "https",
            "base URL must be http or https: {base_url}"
        );

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List one page of threads (1-based)
    pub fn list_threads(&self, page: u32) -> Result<ThreadListResponse, ApiError> {
        let url = format!("{}/api/threads?page={}", self.base_url, page);
        debug!("GET {url}");

        match ureq::get(&url).call() {
            Ok(mut response) => response
                .body_mut()
                .read_json()
                .map_err(|err| ApiError::Body(err.to_string())),
            Err(ureq::Error::StatusCode(status)) => Err(ApiError::from_status(status)),
            Err(err) => Err(ApiError::transport(err)),
        }
    }

    /// Fetch a single thread by ID
    ///
    /// # Errors
    /// Returns [`ApiError::NotFound`] when the thread does not exist;
    /// callers should navigate away rather than render an empty thread.
    pub fn get_thread(&self, id: ThreadId) -> Result<Thread, ApiError> {
        let url = format!("{}/api/threads/{}", self.base_url, id);
        debug!("GET {url}");

        match ureq::get(&url).call() {
            Ok(mut response) => response
                .body_mut()
                .read_json()
                .map_err(|err| ApiError::Body(err.to_string())),
            Err(ureq::Error::StatusCode(status)) => Err(ApiError::from_status(status)),
            Err(err) => Err(ApiError::transport(err)),
        }
    }

    /// Create a thread. Requires a bearer token.
    ///
    /// # Errors
    /// [`ApiError::CapacityReached`] when the board's thread ceiling is
    /// reached (HTTP 403), [`ApiError::Unauthorized`] when the server
    /// rejects the token.
    pub fn create_thread(&self, name: &str, token: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/threads", self.base_url);
        debug!("POST {url}");

        match ureq::post(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send_json(json!({ "name": name }))
        {
            Ok(_) => Ok(()),
            Err(ureq::Error::StatusCode(status)) => Err(ApiError::from_status(status)),
            Err(err) => Err(ApiError::transport(err)),
        }
    }

    /// Delete a thread and its comments
    ///
    /// # Errors
    /// [`ApiError::NotFound`] when the thread is already gone,
    /// [`ApiError::Server`] when the server failed to delete it.
    pub fn delete_thread(&self, id: ThreadId) -> Result<(), ApiError> {
        let url = format!("{}/api/threads/{}", self.base_url, id);
        debug!("DELETE {url}");

        match ureq::delete(&url).call() {
            Ok(_) => Ok(()),
            Err(ureq::Error::StatusCode(status)) => Err(ApiError::from_status(status)),
            Err(err) => Err(ApiError::transport(err)),
        }
    }

    /// List all comments of a thread (newest first, no pagination)
    pub fn list_comments(&self, thread_id: ThreadId) -> Result<CommentListResponse, ApiError> {
        let url = format!("{}/api/comments?threadID={}", self.base_url, thread_id);
        debug!("GET {url}");

        match ureq::get(&url).call() {
            Ok(mut response) => response
                .body_mut()
                .read_json()
                .map_err(|err| ApiError::Body(err.to_string())),
            Err(ureq::Error::StatusCode(status)) => Err(ApiError::from_status(status)),
            Err(err) => Err(ApiError::transport(err)),
        }
    }

    /// Post a comment to a thread. Requires a bearer token.
    ///
    /// # Errors
    /// [`ApiError::CapacityReached`] when the thread's comment ceiling is
    /// reached (HTTP 403).
    pub fn create_comment(
        &self,
        thread_id: ThreadId,
        message: &str,
        token: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/comments", self.base_url);
        debug!("POST {url}");

        match ureq::post(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send_json(json!({ "thread_id": thread_id.as_i64(), "message": message }))
        {
            Ok(_) => Ok(()),
            Err(ureq::Error::StatusCode(status)) => Err(ApiError::from_status(status)),
            Err(err) => Err(ApiError::transport(err)),
        }
    }

    /// Exchange credentials for a bearer token
    ///
    /// The payload field is named `pw_hash` on the wire; the server hashes
    /// and compares it, the client just passes the secret through.
    pub fn login(&self, name: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/api/login", self.base_url);
        debug!("POST {url}");

        match ureq::post(&url).send_json(json!({ "name": name, "pw_hash": password })) {
            Ok(mut response) => {
                let body: LoginResponse = response
                    .body_mut()
                    .read_json()
                    .map_err(|err| ApiError::Body(err.to_string()))?;
                Ok(body.token)
            }
            Err(ureq::Error::StatusCode(status)) => Err(ApiError::from_status(status)),
            Err(err) => Err(ApiError::transport(err)),
        }
    }

    /// Register a new user
    ///
    /// # Errors
    /// [`ApiError::NameTaken`] when the user name already exists (409).
    pub fn register(&self, name: &str, password: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/users", self.base_url);
        debug!("POST {url}");

        match ureq::post(&url).send_json(json!({ "name": name, "pw_hash": password })) {
            Ok(_) => Ok(()),
            Err(ureq::Error::StatusCode(status)) => Err(ApiError::from_status(status)),
            Err(err) => Err(ApiError::transport(err)),
        }
    }
}
