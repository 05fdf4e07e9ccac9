//! Identity boundary for ownership scoping.
//!
//! The gateway trusts an external identity provider for the current
//! caller's identifier; it performs no verification of its own. The
//! provider's subject identifier is an opaque string.

mod traits;
mod types;

pub use traits::IdentityProvider;
pub use types::{FixedIdentity, UserId};
