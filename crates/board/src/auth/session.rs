//! Session-token persistence
//!
//! The browser frontend this client descends from kept the bearer token in
//! a cookie and re-read it on every page mount. The native equivalent is a
//! JSON session file in the config directory: written on login, removed on
//! logout, read at bootstrap. A missing or unreadable file means an
//! anonymous session, never a failure.

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::token::resolve_identity;
use crate::models::Identity;

/// Session filename in the config directory
const SESSION_FILE: &str = "session.json";

/// Stored session data
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Reads and writes the persisted session token
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by the default session file (~/.config/bbs/session.json)
    pub fn new() -> Result<Self> {
        let path =
            config::config_path(SESSION_FILE).context("could not determine config directory")?;
        Ok(Self { path })
    }

    /// Store backed by an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The stored token, if a readable session exists
    pub fn token(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<StoredSession>(&content) {
            Ok(stored) => Some(stored.token),
            Err(err) => {
                warn!("session file {} is corrupt: {err}", self.path.display());
                None
            }
        }
    }

    /// The identity of the stored session (anonymous when signed out)
    pub fn identity(&self) -> Identity {
        resolve_identity(self.token().as_deref())
    }

    /// Persist a token (sign in)
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(&StoredSession {
            token: token.to_string(),
        })?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write session file {}", self.path.display()))?;
        Ok(())
    }

    /// Remove the stored session (sign out). Idempotent.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}
