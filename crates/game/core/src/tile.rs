//! Mahjong tiles drawn by each seed character.
//!
//! Lookup is total: characters outside `0-9a-f` resolve to [`Tile::Unknown`]
//! so rendering never fails on malformed input.

/// Display data for a single tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileInfo {
    pub glyph: &'static str,
    pub name: &'static str,
}

impl TileInfo {
    /// Shown for any character outside the seed alphabet.
    pub const UNKNOWN: TileInfo = TileInfo {
        glyph: "🀫",
        name: "Unknown",
    };
}

/// One tile per hex digit, plus the unknown fallback.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Tile {
    WhiteDragon,
    Character1,
    Character2,
    Character3,
    Character4,
    Character5,
    Character6,
    Character7,
    Character8,
    Character9,
    Bamboo1,
    Bamboo2,
    Bamboo3,
    Bamboo4,
    RedDragon,
    GreenDragon,
    Unknown,
}

impl Tile {
    /// Tile for a seed character. Uppercase hex is accepted.
    pub fn from_char(ch: char) -> Self {
        match ch.to_ascii_lowercase() {
            '0' => Self::WhiteDragon,
            '1' => Self::Character1,
            '2' => Self::Character2,
            '3' => Self::Character3,
            '4' => Self::Character4,
            '5' => Self::Character5,
            '6' => Self::Character6,
            '7' => Self::Character7,
            '8' => Self::Character8,
            '9' => Self::Character9,
            'a' => Self::Bamboo1,
            'b' => Self::Bamboo2,
            'c' => Self::Bamboo3,
            'd' => Self::Bamboo4,
            'e' => Self::RedDragon,
            'f' => Self::GreenDragon,
            _ => Self::Unknown,
        }
    }

    pub const fn info(self) -> TileInfo {
        let (glyph, name) = match self {
            Self::WhiteDragon => ("🀆", "White Dragon"),
            Self::Character1 => ("🀇", "1 of Characters"),
            Self::Character2 => ("🀈", "2 of Characters"),
            Self::Character3 => ("🀉", "3 of Characters"),
            Self::Character4 => ("🀊", "4 of Characters"),
            Self::Character5 => ("🀋", "5 of Characters"),
            Self::Character6 => ("🀌", "6 of Characters"),
            Self::Character7 => ("🀍", "7 of Characters"),
            Self::Character8 => ("🀎", "8 of Characters"),
            Self::Character9 => ("🀏", "9 of Characters"),
            Self::Bamboo1 => ("🀐", "1 of Bamboos"),
            Self::Bamboo2 => ("🀑", "2 of Bamboos"),
            Self::Bamboo3 => ("🀒", "3 of Bamboos"),
            Self::Bamboo4 => ("🀓", "4 of Bamboos"),
            Self::RedDragon => ("🀄", "Red Dragon"),
            Self::GreenDragon => ("🀅", "Green Dragon"),
            Self::Unknown => return TileInfo::UNKNOWN,
        };
        TileInfo { glyph, name }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Display data for a seed character; never fails.
pub fn char_to_tile(ch: char) -> TileInfo {
    Tile::from_char(ch).info()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn every_alphabet_character_has_a_distinct_known_tile() {
        let tiles: Vec<Tile> = GameConfig::ALPHABET
            .iter()
            .map(|&b| Tile::from_char(b as char))
            .collect();
        assert!(tiles.iter().all(|t| t.is_known()));
        assert_eq!(tiles, Tile::iter().take(16).collect::<Vec<_>>());
    }

    #[test]
    fn dragons_and_suits() {
        assert_eq!(char_to_tile('0').name, "White Dragon");
        assert_eq!(char_to_tile('7').name, "7 of Characters");
        assert_eq!(char_to_tile('c').name, "3 of Bamboos");
        assert_eq!(char_to_tile('e').glyph, "🀄");
        assert_eq!(char_to_tile('F').name, "Green Dragon");
    }

    #[test]
    fn outside_alphabet_falls_back() {
        for ch in ['g', 'z', ' ', '#', 'é'] {
            assert_eq!(char_to_tile(ch), TileInfo::UNKNOWN);
        }
    }
}
