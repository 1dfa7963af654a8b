use core::fmt;

use crate::config::GameConfig;
use crate::seed::Seed;

/// Which of the ten seed positions took part in a rule's pattern.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Positions([bool; GameConfig::SEED_LEN]);

impl Positions {
    pub const fn none() -> Self {
        Self([false; GameConfig::SEED_LEN])
    }

    pub const fn all() -> Self {
        Self([true; GameConfig::SEED_LEN])
    }

    pub fn from_fn(f: impl FnMut(usize) -> bool) -> Self {
        Self(core::array::from_fn(f))
    }

    /// Positions whose digit value is one of `digits`.
    pub fn of_digits(seed: &Seed, digits: &[u8]) -> Self {
        let values = seed.hex_values();
        Self::from_fn(|i| digits.contains(&values[i]))
    }

    /// Positions `start..start + len`.
    pub fn span(start: usize, len: usize) -> Self {
        Self::from_fn(|i| i >= start && i < start + len)
    }

    pub fn union(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i] || other.0[i])
    }

    pub fn is_match(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&m| m).count()
    }

    pub fn is_none(&self) -> bool {
        self.count() == 0
    }

    pub fn is_all(&self) -> bool {
        self.count() == GameConfig::SEED_LEN
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn as_array(&self) -> &[bool; GameConfig::SEED_LEN] {
        &self.0
    }
}

impl From<[bool; GameConfig::SEED_LEN]> for Positions {
    fn from(value: [bool; GameConfig::SEED_LEN]) -> Self {
        Self(value)
    }
}

/// Renders as a mask such as `##..######`.
impl fmt::Debug for Positions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in self.0 {
            f.write_str(if m { "#" } else { "." })?;
        }
        Ok(())
    }
}
