//! Session authentication
//!
//! This module provides:
//! - Bearer-token payload decoding into a display identity
//! - Session-token persistence in the config directory

mod session;
mod token;

pub use session::SessionStore;
pub use token::{TokenClaims, TokenError, decode_claims, resolve_identity};
