//! Seed extraction from transaction hashes.
//!
//! A seed is the last ten hex characters of a transaction hash, lowercased.
//! It is derived once per play and never changes afterwards; every other part
//! of the engine reads it through [`Seed`].

use core::fmt;
use core::str::FromStr;

use crate::config::GameConfig;
use crate::error::SeedError;
use crate::tile::Tile;

/// Ten lowercase hex characters taken from the tail of a transaction hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed([u8; GameConfig::SEED_LEN]);

impl Seed {
    /// Derives the seed from a transaction hash.
    ///
    /// Surrounding whitespace and an optional `0x`/`0X` prefix are ignored.
    /// The hash may be of any length as long as at least ten characters remain.
    pub fn from_tx_hash(hash: &str) -> Result<Self, SeedError> {
        let trimmed = hash.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let found = digits.chars().count();
        if found < GameConfig::SEED_LEN {
            return Err(SeedError::InvalidSeedLength { found });
        }

        let window = digits.chars().skip(found - GameConfig::SEED_LEN);
        Self::from_chars(window)
    }

    /// Builds a seed from exactly ten characters, validating each one.
    fn from_chars(chars: impl Iterator<Item = char>) -> Result<Self, SeedError> {
        let mut bytes = [0u8; GameConfig::SEED_LEN];
        for (index, ch) in chars.enumerate() {
            if !ch.is_ascii_hexdigit() {
                return Err(SeedError::InvalidCharacter { index, ch });
            }
            bytes[index] = ch.to_ascii_lowercase() as u8;
        }
        Ok(Self(bytes))
    }

    /// Wraps bytes already known to be lowercase hex.
    pub(crate) const fn from_lower_hex(bytes: [u8; GameConfig::SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// The seed characters in position order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|&b| b as char)
    }

    /// Character at `index` (0..10).
    pub fn char_at(&self, index: usize) -> char {
        self.0[index] as char
    }

    /// Numeric value (0..16) of every position.
    pub fn hex_values(&self) -> [u8; GameConfig::SEED_LEN] {
        self.0.map(hex_value)
    }

    /// Tile shown at every position.
    pub fn tiles(&self) -> [Tile; GameConfig::SEED_LEN] {
        self.0.map(|b| Tile::from_char(b as char))
    }

    /// The seed read back to front.
    pub fn reversed(&self) -> Self {
        let mut bytes = self.0;
        bytes.reverse();
        Self(bytes)
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII hex digits are ever stored.
        core::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// Value of a lowercase hex digit. Callers guarantee the input is valid.
const fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        _ => b - b'a' + 10,
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    /// Parses a literal seed: exactly ten hex characters, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != GameConfig::SEED_LEN {
            return Err(SeedError::InvalidSeedLength { found });
        }
        Self::from_chars(s.chars())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Seed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Seed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
