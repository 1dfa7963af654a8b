//! Player profile and the play transformation.
//!
//! A profile is the whole persisted player state: experience total, play
//! history and task board. [`PlayerProfile::apply_play`] is the only way a
//! play changes it, and every step of a play happens inside that call.

mod history;

pub use history::{History, PlayRecord};

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::SeedError;
use crate::level::{LevelProgress, grant_exp, level_from_exp};
use crate::reward::reward_for_match;
use crate::rules::{MatchResult, evaluate};
use crate::seed::Seed;
use crate::task::{TaskBoard, TaskDefinition};

/// A confirmed transaction as reported by the transaction layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxReceipt {
    pub chain_id: String,
    pub to: String,
    pub value: String,
    pub tx_hash: String,
    pub block_number: Option<u64>,
}

/// Time inputs of a play, supplied by the caller.
///
/// `today` selects the task periods; `timestamp` is stamped on the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayClock {
    pub today: NaiveDate,
    pub timestamp: DateTime<Utc>,
}

/// Persisted player state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerProfile {
    pub total_exp: u64,
    pub history: History,
    pub tasks: TaskBoard,
}

impl PlayerProfile {
    /// A new player: no experience, no history, empty task buckets.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            total_exp: 0,
            history: History::new(),
            tasks: TaskBoard::new(today),
        }
    }

    pub fn level(&self) -> u32 {
        level_from_exp(self.total_exp)
    }

    pub fn progress(&self) -> LevelProgress {
        LevelProgress::from_exp(self.total_exp)
    }

    /// Applies one confirmed play.
    ///
    /// The seed is derived first; an invalid hash leaves the profile
    /// untouched. Then, in order: the outcome is recorded in history, the
    /// base reward is granted, task buckets roll over and count the play,
    /// and the bonus of newly completed tasks is granted. Both grants respect
    /// the level cap. Task progress counts the full base reward even when the
    /// cap withheld it.
    pub fn apply_play(
        &mut self,
        receipt: &TxReceipt,
        clock: PlayClock,
    ) -> Result<PlayReport, SeedError> {
        let seed = Seed::from_tx_hash(&receipt.tx_hash)?;
        let outcome = evaluate(&seed);
        let level_before = self.level();

        self.history.push(PlayRecord {
            chain_id: receipt.chain_id.clone(),
            to: receipt.to.clone(),
            value: receipt.value.clone(),
            tx_hash: receipt.tx_hash.clone(),
            block_number: receipt
                .block_number
                .map(|block| block.to_string())
                .unwrap_or_default(),
            seed,
            rule: outcome.summary(),
            timestamp: clock.timestamp,
        });

        let base_reward = reward_for_match(&outcome);
        let base = grant_exp(self.total_exp, base_reward);
        self.total_exp = base.after;

        self.tasks.roll_over(clock.today);
        self.tasks.record_play(outcome.is_win(), base_reward);
        let completed_tasks = self.tasks.complete_ready();

        let bonus_reward: u64 = completed_tasks.iter().map(|task| task.reward).sum();
        let bonus = grant_exp(self.total_exp, bonus_reward);
        self.total_exp = bonus.after;

        Ok(PlayReport {
            seed,
            outcome,
            base_reward,
            base_exp: base.applied(),
            bonus_exp: bonus.applied(),
            completed_tasks,
            level_before,
            level_after: self.level(),
            total_exp: self.total_exp,
        })
    }
}

/// What a play did to the profile.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayReport {
    pub seed: Seed,
    pub outcome: MatchResult,
    /// Reward the outcome is worth, before the level cap.
    pub base_reward: u64,
    /// Base experience actually added.
    pub base_exp: u64,
    /// Task bonus experience actually added.
    pub bonus_exp: u64,
    pub completed_tasks: Vec<&'static TaskDefinition>,
    pub level_before: u32,
    pub level_after: u32,
    pub total_exp: u64,
}

impl PlayReport {
    pub fn won(&self) -> bool {
        self.outcome.is_win()
    }

    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }

    pub fn gained_exp(&self) -> u64 {
        self.base_exp + self.bonus_exp
    }
}
