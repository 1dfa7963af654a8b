//! Play session: the loaded profile plus the store it is saved to.

use mahjong_core::{
    MatchResult, PlayReport, PlayerProfile, Rollover, Seed, TxReceipt, evaluate, reward_for_match,
};

use crate::api::Result;
use crate::clock::Clock;
use crate::repository::{KeyValueStore, ProfileRepository};

/// Evaluation of a seed that does not touch the profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preview {
    pub seed: Seed,
    pub outcome: MatchResult,
    pub reward: u64,
}

impl Preview {
    pub fn of(seed: Seed) -> Self {
        let outcome = evaluate(&seed);
        Self {
            seed,
            outcome,
            reward: reward_for_match(&outcome),
        }
    }
}

/// Owns a player's profile for the lifetime of a client.
///
/// Plays take `&mut self`, so they are applied one at a time. After each play
/// the whole profile is written back; concurrent sessions on the same store
/// overwrite each other, last write wins.
pub struct PlaySession<S, C> {
    repository: ProfileRepository<S>,
    clock: C,
    profile: PlayerProfile,
}

impl<S: KeyValueStore, C: Clock> PlaySession<S, C> {
    /// Load the stored profile and roll task periods over to today.
    pub fn open(store: S, clock: C) -> Result<Self> {
        let repository = ProfileRepository::new(store);
        let profile = repository.load(clock.today())?;

        tracing::debug!(
            "Opened session: level {}, {} exp, {} plays",
            profile.level(),
            profile.total_exp,
            profile.history.len()
        );

        Ok(Self {
            repository,
            clock,
            profile,
        })
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Apply a confirmed transaction as a play and persist the result.
    ///
    /// The in-memory profile only changes once the save succeeded.
    pub fn play(&mut self, receipt: &TxReceipt) -> Result<PlayReport> {
        let mut next = self.profile.clone();
        let report = next.apply_play(receipt, self.clock.play_clock())?;
        self.repository.save(&next)?;
        self.profile = next;

        match report.outcome.rule() {
            Some(rule) => tracing::info!(
                "Play {}: {} ({}), +{} exp",
                report.seed,
                rule.name,
                rule.payout,
                report.base_exp
            ),
            None => tracing::info!("Play {}: no win, +{} exp", report.seed, report.base_exp),
        }
        for task in &report.completed_tasks {
            tracing::info!("Task completed: {} (+{} exp)", task.name, task.reward);
        }
        if report.leveled_up() {
            tracing::info!(
                "Level up: {} -> {}",
                report.level_before,
                report.level_after
            );
        }

        Ok(report)
    }

    /// Roll task periods over to today, saving when a bucket was replaced.
    pub fn refresh(&mut self) -> Result<Rollover> {
        let rollover = self.profile.tasks.roll_over(self.clock.today());
        if rollover.any() {
            self.repository.save(&self.profile)?;
            tracing::debug!(
                "Task periods rolled over (daily: {}, weekly: {})",
                rollover.daily,
                rollover.weekly
            );
        }
        Ok(rollover)
    }

    /// Evaluate a seed without recording anything.
    pub fn preview(&self, seed: Seed) -> Preview {
        Preview::of(seed)
    }

    /// Delete the stored profile and start over as a new player.
    pub fn reset(&mut self) -> Result<()> {
        self.repository.reset()?;
        self.profile = PlayerProfile::new(self.clock.today());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mahjong_core::{ErrorSeverity, GameError};

    use super::*;
    use crate::clock::FixedClock;
    use crate::repository::InMemoryStore;

    fn clock() -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn receipt(tx_hash: &str) -> TxReceipt {
        TxReceipt {
            chain_id: "1776".into(),
            to: "0x6cd6592b7d2a9b1e59aa60a6138434d2fe4cd062".into(),
            value: "0.000001".into(),
            tx_hash: tx_hash.into(),
            block_number: None,
        }
    }

    #[test]
    fn rejected_hash_changes_nothing() {
        let mut session = PlaySession::open(InMemoryStore::new(), clock()).unwrap();
        let err = session.play(&receipt("0xabc")).unwrap_err();
        assert!(matches!(err, crate::RuntimeError::Seed(_)));
        assert_eq!(err.error_code(), "INVALID_SEED_LENGTH");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(session.profile().history.is_empty());
        assert!(session.repository.store().keys().unwrap().is_empty());
    }

    #[test]
    fn play_is_persisted() {
        let mut session = PlaySession::open(InMemoryStore::new(), clock()).unwrap();
        let report = session.play(&receipt("0x0123456789")).unwrap();
        assert_eq!(report.total_exp, 85);

        let reloaded = session.repository.load(clock().today()).unwrap();
        assert_eq!(&reloaded, session.profile());
    }

    #[test]
    fn preview_does_not_record() {
        let session = PlaySession::open(InMemoryStore::new(), clock()).unwrap();
        let preview = session.preview("5555555555".parse().unwrap());
        assert_eq!(preview.reward, 5000);
        assert!(preview.outcome.is_win());
        assert!(session.profile().history.is_empty());
    }

    #[test]
    fn reset_starts_over() {
        let mut session = PlaySession::open(InMemoryStore::new(), clock()).unwrap();
        session.play(&receipt("0x0123456789")).unwrap();
        session.reset().unwrap();
        assert_eq!(session.profile(), &PlayerProfile::new(clock().today()));
        assert!(session.repository.store().keys().unwrap().is_empty());
    }
}
