use super::UserId;

/// Source of the current caller's identity.
///
/// Implementations wrap whatever external authentication mechanism is
/// in use. The gateway asks for the current user on every operation
/// and uses the answer as the ownership-scoping key.
pub trait IdentityProvider: Send + Sync {
    /// Returns the authenticated caller, or `None` if nobody is
    /// signed in.
    fn current_user(&self) -> Option<UserId>;
}
