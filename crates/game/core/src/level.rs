//! Leveling curve: cumulative experience thresholds for levels 1..=100.
//!
//! The curve is piecewise over five bands. Levels 2..=10 cost a flat 50 per
//! level step; every later band adds `base + (k × linear) + k^exponent × scale`
//! per level, where `k` counts levels into the band. Each per-level cost is
//! floored before accumulating.
//!
//! | levels  | base | linear | exponent | scale |
//! |---------|------|--------|----------|-------|
//! | 11..=30 | 100  | 20     | 1.4      | 5     |
//! | 31..=60 | 300  | 30     | 1.5      | 8     |
//! | 61..=90 | 800  | 50     | 1.6      | 15    |
//! | 91..    | 2000 | 100    | 1.7      | 30    |
//!
//! Level is always derived from the experience total, never stored.

use crate::config::GameConfig;

/// One polynomial band of the curve.
struct Band {
    first: u32,
    base: f64,
    linear: f64,
    exponent: f64,
    scale: f64,
}

impl Band {
    fn cost(&self, level: u32) -> u64 {
        let k = f64::from(level - self.first + 1);
        (self.base + k * self.linear + k.powf(self.exponent) * self.scale).floor() as u64
    }
}

/// Bands after the flat opening, ascending by first level.
const BANDS: [Band; 4] = [
    Band { first: 11, base: 100.0, linear: 20.0, exponent: 1.4, scale: 5.0 },
    Band { first: 31, base: 300.0, linear: 30.0, exponent: 1.5, scale: 8.0 },
    Band { first: 61, base: 800.0, linear: 50.0, exponent: 1.6, scale: 15.0 },
    Band { first: 91, base: 2000.0, linear: 100.0, exponent: 1.7, scale: 30.0 },
];

/// Per-level step in the opening band (levels 2..=10).
const OPENING_STEP: u64 = 50;
const OPENING_LAST: u32 = 10;

/// Experience needed to go from `level - 1` to `level`.
fn step_cost(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    if level <= OPENING_LAST {
        return OPENING_STEP * u64::from(level - 1);
    }
    BANDS
        .iter()
        .rev()
        .find(|band| level >= band.first)
        .map_or(0, |band| band.cost(level))
}

/// Cumulative experience at which `level` is reached. Level 1 starts at 0.
pub fn total_exp_for_level(level: u32) -> u64 {
    (2..=level).map(step_cost).sum()
}

/// Highest level whose threshold does not exceed `total_exp`, capped at 100.
pub fn level_from_exp(total_exp: u64) -> u32 {
    let mut threshold = 0u64;
    for level in 1..GameConfig::MAX_LEVEL {
        threshold += step_cost(level + 1);
        if total_exp < threshold {
            return level;
        }
    }
    GameConfig::MAX_LEVEL
}

/// Result of adding experience under the level cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpGrant {
    pub before: u64,
    pub after: u64,
    pub requested: u64,
}

impl ExpGrant {
    /// Experience actually added.
    pub fn applied(&self) -> u64 {
        self.after - self.before
    }

    /// True when the cap withheld the requested amount.
    pub fn capped(&self) -> bool {
        self.requested > 0 && self.applied() == 0
    }

    pub fn level_before(&self) -> u32 {
        level_from_exp(self.before)
    }

    pub fn level_after(&self) -> u32 {
        level_from_exp(self.after)
    }
}

/// Adds `amount` to `total` unless the player is already at the maximum level.
///
/// The cap is checked against the level before the grant, so the grant that
/// crosses into level 100 is applied in full.
pub fn grant_exp(total: u64, amount: u64) -> ExpGrant {
    let after = if level_from_exp(total) >= GameConfig::MAX_LEVEL {
        total
    } else {
        total.saturating_add(amount)
    };
    ExpGrant {
        before: total,
        after,
        requested: amount,
    }
}

/// Where an experience total sits within its level, for progress display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub total_exp: u64,
    /// Threshold of the current level.
    pub level_start: u64,
    /// Threshold of the next level.
    pub next_level_start: u64,
}

impl LevelProgress {
    pub fn from_exp(total_exp: u64) -> Self {
        let level = level_from_exp(total_exp);
        Self {
            level,
            total_exp,
            level_start: total_exp_for_level(level),
            next_level_start: total_exp_for_level(level + 1),
        }
    }

    pub fn is_max(&self) -> bool {
        self.level >= GameConfig::MAX_LEVEL
    }

    /// Experience earned since reaching the current level.
    pub fn into_level(&self) -> u64 {
        self.total_exp.saturating_sub(self.level_start)
    }

    /// Experience the current level spans.
    pub fn span(&self) -> u64 {
        self.next_level_start - self.level_start
    }

    /// Experience still needed for the next level.
    pub fn remaining(&self) -> u64 {
        self.next_level_start.saturating_sub(self.total_exp)
    }

    /// Completion of the current level in percent; 100 at the maximum level.
    pub fn percent(&self) -> f64 {
        if self.is_max() || self.span() == 0 {
            return 100.0;
        }
        (self.into_level() as f64 / self.span() as f64 * 100.0).min(100.0)
    }
}
