//! Player profile persistence on top of a [`KeyValueStore`].

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use mahjong_core::{History, PlayerProfile, TaskBoard};

use super::{KeyValueStore, Result};

/// Storage key of the experience total, a decimal integer.
pub const TOTAL_EXP_KEY: &str = "hashMahjongTotalExp";
/// Storage key of the play history, a JSON array oldest first.
pub const HISTORY_KEY: &str = "hashMahjongHistory";
/// Storage key of the task board, a JSON object with `daily` and `weekly`.
pub const TASKS_KEY: &str = "hashMahjongTasks";

/// Loads and saves a [`PlayerProfile`] as three independent store entries.
///
/// Each entry is recovered on its own: a malformed value is logged and
/// replaced by its default without affecting the other two.
pub struct ProfileRepository<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored profile, rolling task buckets over to `today`.
    ///
    /// Missing entries yield a new player. Store failures are returned; only
    /// undecodable values are recovered.
    pub fn load(&self, today: NaiveDate) -> Result<PlayerProfile> {
        let total_exp = match self.store.get(TOTAL_EXP_KEY)? {
            None => 0,
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|err| {
                tracing::warn!("Resetting malformed {}: {}", TOTAL_EXP_KEY, err);
                0
            }),
        };

        let history: History = self.load_json(HISTORY_KEY)?.unwrap_or_default();
        let stored_tasks: Option<TaskBoard> = self.load_json(TASKS_KEY)?;

        let tasks = TaskBoard::init(stored_tasks.clone(), today);
        if stored_tasks.is_some_and(|stored| stored != tasks) {
            tracing::debug!(
                "Task periods rolled over to {} / {}",
                tasks.daily.key,
                tasks.weekly.key
            );
        }

        Ok(PlayerProfile {
            total_exp,
            history,
            tasks,
        })
    }

    /// Write all three entries.
    ///
    /// Tasks go first and the experience total last, so completions are never
    /// missing behind a total that already paid for them. When a write fails
    /// the entries written before it are restored to their previous values.
    pub fn save(&self, profile: &PlayerProfile) -> Result<()> {
        let entries = [
            (TASKS_KEY, serde_json::to_string(&profile.tasks)?),
            (HISTORY_KEY, serde_json::to_string(&profile.history)?),
            (TOTAL_EXP_KEY, profile.total_exp.to_string()),
        ];

        let mut written: Vec<(&str, Option<String>)> = Vec::with_capacity(entries.len());
        for (key, value) in &entries {
            let previous = self.store.get(key)?;
            if let Err(err) = self.store.set(key, value) {
                self.restore(&written);
                return Err(err);
            }
            written.push((*key, previous));
        }
        Ok(())
    }

    fn restore(&self, written: &[(&str, Option<String>)]) {
        for (key, previous) in written.iter().rev() {
            let restored = match previous {
                Some(value) => self.store.set(key, value),
                None => self.store.remove(key),
            };
            if let Err(err) = restored {
                tracing::warn!("Failed to restore {} after a partial save: {}", key, err);
            }
        }
    }

    /// Remove every stored entry of the profile.
    pub fn reset(&self) -> Result<()> {
        for key in [TOTAL_EXP_KEY, HISTORY_KEY, TASKS_KEY] {
            self.store.remove(key)?;
        }
        tracing::info!("Profile reset");
        Ok(())
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!("Resetting malformed {}: {}", key, err);
                Ok(None)
            }
        }
    }
}
