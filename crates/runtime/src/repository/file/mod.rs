//! File-backed store implementation.

mod store;

pub use store::FileStore;
