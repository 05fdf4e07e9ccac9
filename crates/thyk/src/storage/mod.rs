//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `thyk_core::storage`. The in-memory backend stands in for the
//! remote document store: it supports exactly the capability set the
//! gateway depends on (insert with generated id, get by id, partial
//! update, delete, and filtered queries by owner equality and
//! due-date range).

pub mod inmemory;

pub use inmemory::InMemoryStore;
