//! In-memory data layer.
//!
//! Holds the record types shared by every crate and a read-only [`Store`]
//! seeded with the demo dataset. Nothing here is ever written after startup.

pub mod models;
pub mod seed;
pub mod store;

pub use store::Store;
