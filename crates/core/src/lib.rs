//! Core domain types and traits for the thyk task manager.
//!
//! This crate is the functional core of the data-access layer: pure
//! data types, repository and cache traits, and time-window
//! resolution. It performs no I/O of its own; concrete storage and
//! cache backends live in the `thyk` crate.

pub mod auth;
pub mod cache;
pub mod serde;
pub mod storage;
pub mod task;
