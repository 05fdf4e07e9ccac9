use std::fmt;

use serde::{Deserialize, Serialize};

use super::IdentityProvider;

/// Opaque identifier for an authenticated user.
///
/// This is whatever subject identifier the external identity provider
/// hands out. It is never parsed or interpreted, only compared for
/// equality when scoping queries and mutations to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a user id from the provider's subject identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An identity provider for a session with a known, fixed caller.
///
/// Covers the common case where the application resolves the signed-in
/// user once (after the external login flow) and constructs the
/// gateway for that session.
#[derive(Debug, Clone)]
pub struct FixedIdentity {
    user: Option<UserId>,
}

impl FixedIdentity {
    /// Creates a provider for a signed-in user.
    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    /// Creates a provider with no authenticated user.
    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display_and_as_str() {
        let id = UserId::new("firebase-uid-123");
        assert_eq!(id.to_string(), "firebase-uid-123");
        assert_eq!(id.as_str(), "firebase-uid-123");
    }

    #[test]
    fn test_user_id_serializes_as_plain_string() {
        let id = UserId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }

    #[test]
    fn test_fixed_identity_signed_in() {
        let identity = FixedIdentity::signed_in(UserId::new("u1"));
        assert_eq!(identity.current_user(), Some(UserId::new("u1")));
    }

    #[test]
    fn test_fixed_identity_signed_out() {
        let identity = FixedIdentity::signed_out();
        assert_eq!(identity.current_user(), None);
    }
}
