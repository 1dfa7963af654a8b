//! Repository layer for persisted player data.
//!
//! Stores are plain string key-value maps. [`ProfileRepository`] owns the
//! encoding of a [`PlayerProfile`](mahjong_core::PlayerProfile) into them.

mod error;
mod file;
mod memory;
mod profile;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use profile::{HISTORY_KEY, ProfileRepository, TASKS_KEY, TOTAL_EXP_KEY};
pub use traits::KeyValueStore;
