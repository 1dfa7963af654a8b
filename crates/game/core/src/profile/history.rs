use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::config::GameConfig;
use crate::rules::RuleSummary;
use crate::seed::Seed;

/// One play, as it appears in the history log.
///
/// Transaction fields are kept as the strings the transaction layer reported.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayRecord {
    pub chain_id: String,
    pub to: String,
    #[cfg_attr(feature = "serde", serde(rename = "valueEth"))]
    pub value: String,
    pub tx_hash: String,
    /// Empty when the block was not known at record time.
    #[cfg_attr(feature = "serde", serde(default))]
    pub block_number: String,
    #[cfg_attr(feature = "serde", serde(rename = "seed10"))]
    pub seed: Seed,
    pub rule: Option<RuleSummary>,
    pub timestamp: DateTime<Utc>,
}

impl PlayRecord {
    pub fn is_win(&self) -> bool {
        self.rule.is_some()
    }
}

/// Play log holding at most [`GameConfig::HISTORY_LIMIT`] records.
///
/// Records are kept in insertion order; pushing past the limit evicts the
/// oldest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<PlayRecord>", into = "Vec<PlayRecord>")
)]
pub struct History {
    records: VecDeque<PlayRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, returning the evicted one if the log was full.
    pub fn push(&mut self, record: PlayRecord) -> Option<PlayRecord> {
        self.records.push_back(record);
        if self.records.len() > GameConfig::HISTORY_LIMIT {
            self.records.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PlayRecord> + ExactSizeIterator {
        self.records.iter()
    }

    /// Newest first, paired with each record's 1-based insertion number.
    pub fn newest_first(&self) -> impl Iterator<Item = (usize, &PlayRecord)> {
        self.records
            .iter()
            .enumerate()
            .rev()
            .map(|(index, record)| (index + 1, record))
    }

    pub fn latest(&self) -> Option<&PlayRecord> {
        self.records.back()
    }
}

impl From<Vec<PlayRecord>> for History {
    fn from(mut records: Vec<PlayRecord>) -> Self {
        let excess = records.len().saturating_sub(GameConfig::HISTORY_LIMIT);
        records.drain(..excess);
        Self {
            records: records.into(),
        }
    }
}

impl From<History> for Vec<PlayRecord> {
    fn from(history: History) -> Self {
        history.records.into()
    }
}
