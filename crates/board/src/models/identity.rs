//! Identity derived from the session's bearer token

use serde::{Deserialize, Serialize};

/// The current session's user, derived locally from the bearer token.
///
/// `user_id == None` means anonymous (no token, or a token that failed to
/// decode). An identity is computed once per session bootstrap and only
/// ever replaced wholesale, never field-mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Numeric user ID from the token claims
    pub user_id: Option<i64>,
    /// Display name from the token claims (empty when anonymous)
    pub name: String,
}

impl Identity {
    pub fn new(user_id: i64, name: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            name: name.into(),
        }
    }

    /// The identity of a session with no usable token
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            name: String::new(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous() {
        let identity = Identity::anonymous();
        assert!(identity.is_anonymous());
        assert!(identity.name.is_empty());
    }

    #[test]
    fn test_signed_in() {
        let identity = Identity::new(5, "alice");
        assert!(!identity.is_anonymous());
        assert_eq!(identity.user_id, Some(5));
        assert_eq!(identity.name, "alice");
    }
}
