//! Runtime services around the deterministic Hash Mahjong engine.
//!
//! This crate wires the pure rules in `mahjong-core` to a clock and a
//! key-value store. Consumers open a [`PlaySession`] to apply confirmed
//! transactions as plays and read back the player profile.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the play session
//! - [`api`] exposes the error types downstream clients interact with
//! - [`repository`] provides the stores and the profile encoding
//! - [`clock`] and [`config`] supply time and settings
pub mod api;
pub mod clock;
pub mod config;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{RuntimeConfig, default_data_dir};
pub use repository::{
    FileStore, HISTORY_KEY, InMemoryStore, KeyValueStore, ProfileRepository, RepositoryError,
    TASKS_KEY, TOTAL_EXP_KEY,
};
pub use session::{PlaySession, Preview};
