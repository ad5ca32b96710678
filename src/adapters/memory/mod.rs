//! In-memory adapters.
//!
//! `InMemoryStore` implements every persistence port over shared tables.
//! Used by tests and by local runs without a database.

mod store;

pub use store::InMemoryStore;
