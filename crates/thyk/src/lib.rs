//! Data-access and synchronization layer for the thyk task manager.
//!
//! The [`gateway::Gateway`] translates logical HTTP-shaped requests
//! (`GET /api/tasks/timeframe/daily`, ...) into store operations,
//! enforcing ownership scoping and payload validation. The
//! [`gateway::CachedGateway`] wraps it with a read-through cache keyed
//! by request path, invalidated after mutations.

pub mod cache;
pub mod gateway;
pub mod storage;
