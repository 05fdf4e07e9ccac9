//! In-memory document store.
//!
//! Stores all data in HashMaps wrapped in `Arc<RwLock<_>>`. Data is
//! not persisted and is lost when the store is dropped.

mod repository;

pub use repository::InMemoryStore;
