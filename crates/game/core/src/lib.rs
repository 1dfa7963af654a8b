//! Deterministic rules of Hash Mahjong.
//!
//! `mahjong-core` turns a transaction hash into a ten-tile seed, evaluates the
//! ordered rule table against it and prices the outcome in experience. It also
//! owns the leveling curve and the daily/weekly task tracker. Everything here
//! is pure: time is passed in by the caller and nothing touches I/O.
//!
//! All profile mutation flows through [`PlayerProfile::apply_play`]; supporting
//! crates depend on the types re-exported here.
pub mod config;
pub mod error;
pub mod level;
pub mod profile;
pub mod reward;
pub mod rules;
pub mod seed;
pub mod task;
pub mod tile;

pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError, SeedError};
pub use level::{ExpGrant, LevelProgress, grant_exp, level_from_exp, total_exp_for_level};
pub use profile::{History, PlayClock, PlayRecord, PlayReport, PlayerProfile, TxReceipt};
pub use reward::{reward_for, reward_for_match};
pub use rules::{
    FrequencyMap, MatchResult, Positions, RULES, Rule, RuleId, RuleSummary, evaluate,
    example_seed, frequency_map, matching_positions, rule_by_id,
};
pub use seed::Seed;
pub use task::{
    PeriodKeys, ProgressField, Rollover, TASKS, TaskBoard, TaskDefinition, TaskId, TaskPeriod,
    TaskPeriodState, TaskProgress, TaskStatus, day_key, tasks_for, week_key,
};
pub use tile::{Tile, TileInfo, char_to_tile};
