//! In-memory store for tests and sessions that should not touch disk.

mod store;

pub use store::InMemoryStore;
