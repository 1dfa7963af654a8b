//! Command implementations for the client
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check;
mod history;
mod play;
mod profile;
mod reset;
mod rules;
mod tasks;

pub use check::Check;
pub use history::History;
pub use play::Play;
pub use profile::Profile;
pub use reset::Reset;
pub use rules::Rules;
pub use tasks::Tasks;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mahjong_runtime::{
    FileStore, InMemoryStore, KeyValueStore, PlaySession, RuntimeConfig, SystemClock,
};

/// Session over whichever store the configuration selected.
pub type Session = PlaySession<Box<dyn KeyValueStore>, SystemClock>;

/// Where the profile is stored, shared by every command that reads it.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Save data directory (overrides SAVE_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Keep the profile in memory for this invocation only
    #[arg(long, global = true)]
    memory: bool,
}

impl StoreArgs {
    /// Environment configuration with command-line overrides applied.
    pub fn config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::from_env();
        if let Some(dir) = &self.data_dir {
            config.save_data_dir = Some(dir.clone());
        }
        if self.memory {
            config.enable_persistence = false;
        }
        config
    }

    pub fn open_session(&self, config: &RuntimeConfig) -> Result<Session> {
        let store: Box<dyn KeyValueStore> = if config.enable_persistence {
            let dir = config.data_dir();
            tracing::debug!("Using save data in {}", dir.display());
            Box::new(
                FileStore::new(&dir)
                    .with_context(|| format!("Failed to open save data: {}", dir.display()))?,
            )
        } else {
            tracing::debug!("Persistence disabled, using in-memory store");
            Box::new(InMemoryStore::new())
        };

        PlaySession::open(store, SystemClock).context("Failed to load profile")
    }
}
