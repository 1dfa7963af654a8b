//! Character frequency counting over a seed.

use crate::config::GameConfig;
use crate::seed::Seed;

/// Occurrence count of every hex digit in a seed.
///
/// Indexed by digit value, so every enumeration runs in ascending character
/// order (`0`..`9`, then `a`..`f`). Rules that must pick among several
/// qualifying characters rely on this order for reproducible highlighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: [u8; 16],
}

impl FrequencyMap {
    pub fn from_seed(seed: &Seed) -> Self {
        let mut counts = [0u8; 16];
        for value in seed.hex_values() {
            counts[value as usize] += 1;
        }
        Self { counts }
    }

    /// Count for a digit value (0..16).
    pub fn get(&self, digit: u8) -> u8 {
        self.counts.get(digit as usize).copied().unwrap_or(0)
    }

    /// Count for a seed character; zero for anything outside the alphabet.
    pub fn get_char(&self, ch: char) -> u8 {
        ch.to_digit(16).map_or(0, |d| self.get(d as u8))
    }

    /// `(character, count)` for every character present, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(digit, count)| (GameConfig::ALPHABET[digit] as char, *count))
    }

    /// Number of distinct characters in the seed.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Number of characters occurring exactly `n` times.
    pub fn count_exactly(&self, n: u8) -> usize {
        self.counts.iter().filter(|&&c| c == n).count()
    }

    /// Whether some character occurs `n` times or more.
    pub fn has_at_least(&self, n: u8) -> bool {
        self.counts.iter().any(|&c| c >= n)
    }

    /// Digit values whose count satisfies `pred`, ascending.
    pub fn digits_where(&self, pred: impl Fn(u8) -> bool) -> impl Iterator<Item = u8> {
        self.counts
            .into_iter()
            .enumerate()
            .filter(move |(_, count)| *count > 0 && pred(*count))
            .map(|(digit, _)| digit as u8)
    }

    /// Digit values occurring exactly `n` times, ascending.
    pub fn digits_exactly(&self, n: u8) -> impl Iterator<Item = u8> {
        self.digits_where(move |c| c == n)
    }

    /// Lowest digit value occurring at least `n` times.
    pub fn first_at_least(&self, n: u8) -> Option<u8> {
        self.digits_where(move |c| c >= n).next()
    }
}
