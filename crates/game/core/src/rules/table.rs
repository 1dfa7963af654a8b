//! The static rule table.
//!
//! Order is priority: rarer patterns come first because a seed may satisfy
//! several predicates at once (ten identical tiles also hold "any triple").
//! Each entry pairs its predicate with the position deriver that explains it;
//! the two must agree on which characters make up the pattern.

use super::frequency::FrequencyMap;
use super::positions::Positions;
use super::straight::{first_disjoint_pair, first_run};
use super::{Rule, RuleId};
use crate::seed::Seed;

const STRAIGHT: usize = 5;
const SHORT_STRAIGHT: usize = 4;

pub static RULES: [Rule; 18] = [
    Rule {
        id: RuleId(1),
        name: "Tenfold Harmony",
        payout: "10000x",
        description: "All 10 tiles are identical.",
        predicate: |_, c| c.has_at_least(10),
        positions: |_, _| Positions::all(),
    },
    Rule {
        id: RuleId(2),
        name: "Ninefold Harmony",
        payout: "2000x",
        description: "9 tiles are identical.",
        predicate: |_, c| c.has_at_least(9),
        positions: |s, c| n_of_a_kind(s, c, 9),
    },
    Rule {
        id: RuleId(3),
        name: "Eightfold Harmony",
        payout: "500x",
        description: "8 tiles are identical.",
        predicate: |_, c| c.has_at_least(8),
        positions: |s, c| n_of_a_kind(s, c, 8),
    },
    Rule {
        id: RuleId(4),
        name: "Sevenfold Harmony",
        payout: "200x",
        description: "7 tiles are identical.",
        predicate: |_, c| c.has_at_least(7),
        positions: |s, c| n_of_a_kind(s, c, 7),
    },
    Rule {
        id: RuleId(5),
        name: "Sixfold Harmony",
        payout: "80x",
        description: "6 tiles are identical.",
        predicate: |_, c| c.has_at_least(6),
        positions: |s, c| n_of_a_kind(s, c, 6),
    },
    Rule {
        id: RuleId(6),
        name: "Fivefold Harmony",
        payout: "30x",
        description: "5 tiles are identical.",
        predicate: |_, c| c.has_at_least(5),
        positions: |s, c| n_of_a_kind(s, c, 5),
    },
    Rule {
        id: RuleId(7),
        name: "Double Quads",
        payout: "200x",
        description: "Two separate 4-of-a-kind sets (4+4+2).",
        predicate: |_, c| c.count_exactly(4) >= 2,
        positions: |s, c| groups(s, c, &[(4, 2)]),
    },
    Rule {
        id: RuleId(8),
        name: "Quad + Triple",
        payout: "120x",
        description: "A 4-of-a-kind plus a 3-of-a-kind.",
        predicate: |_, c| c.count_exactly(4) >= 1 && c.count_exactly(3) >= 1,
        positions: |s, c| groups(s, c, &[(4, 1), (3, 1)]),
    },
    Rule {
        id: RuleId(9),
        name: "Three Triples",
        payout: "90x",
        description: "At least three 3-of-a-kind sets (3+3+3+1).",
        predicate: |_, c| c.count_exactly(3) >= 3,
        positions: |s, c| groups(s, c, &[(3, 3)]),
    },
    Rule {
        id: RuleId(10),
        name: "Two Triples",
        payout: "35x",
        description: "At least two 3-of-a-kind sets.",
        predicate: |_, c| c.count_exactly(3) >= 2,
        positions: |s, c| groups(s, c, &[(3, 2)]),
    },
    Rule {
        id: RuleId(11),
        name: "Five Pairs",
        payout: "25x",
        description: "Exactly five pairs (2+2+2+2+2).",
        predicate: |_, c| c.count_exactly(2) == 5 && c.distinct() == 5,
        positions: |s, c| all_pairs_when(s, c, 5),
    },
    Rule {
        id: RuleId(12),
        name: "Four Pairs",
        payout: "10x",
        description: "Exactly four pairs (2+2+2+2+1+1).",
        predicate: |_, c| c.count_exactly(2) == 4,
        positions: |s, c| all_pairs_when(s, c, 4),
    },
    Rule {
        id: RuleId(13),
        name: "Full House",
        payout: "20x",
        description: "At least one triple and at least one pair.",
        predicate: |_, c| c.count_exactly(3) >= 1 && c.count_exactly(2) >= 1,
        positions: full_house,
    },
    Rule {
        id: RuleId(14),
        name: "Any Triple",
        payout: "5x",
        description: "At least one 3-of-a-kind.",
        predicate: |_, c| c.count_exactly(3) >= 1,
        positions: |s, c| groups(s, c, &[(3, 1)]),
    },
    Rule {
        id: RuleId(15),
        name: "Straight-5",
        payout: "15x",
        description: "Any 5 consecutive tiles increasing or decreasing (adjacent positions).",
        predicate: |s, _| first_run(s, STRAIGHT).is_some(),
        positions: |s, _| {
            first_run(s, STRAIGHT).map_or(Positions::none(), |start| {
                Positions::span(start, STRAIGHT)
            })
        },
    },
    Rule {
        id: RuleId(16),
        name: "Double Straight-4",
        payout: "30x",
        description: "Two non-overlapping 4-tile straights (adjacent positions).",
        predicate: |s, _| first_disjoint_pair(s, SHORT_STRAIGHT).is_some(),
        positions: |s, _| {
            first_disjoint_pair(s, SHORT_STRAIGHT).map_or(Positions::none(), |(a, b)| {
                Positions::span(a, SHORT_STRAIGHT).union(Positions::span(b, SHORT_STRAIGHT))
            })
        },
    },
    Rule {
        id: RuleId(17),
        name: "Palindrome",
        payout: "50x",
        description: "The 10-hex seed reads the same forwards and backwards.",
        predicate: |s, _| *s == s.reversed(),
        positions: |s, _| {
            let mirrored = s.reversed();
            Positions::from_fn(|i| s.char_at(i) == mirrored.char_at(i))
        },
    },
    Rule {
        id: RuleId(18),
        name: "Alternating AB",
        payout: "40x",
        description: "ABABABABAB pattern (A ≠ B).",
        predicate: |s, _| {
            let (a, b) = (s.char_at(0), s.char_at(1));
            a != b && s.chars().enumerate().all(|(i, ch)| ch == if i % 2 == 0 { a } else { b })
        },
        positions: |s, _| {
            let (a, b) = (s.char_at(0), s.char_at(1));
            if a == b {
                return Positions::none();
            }
            Positions::from_fn(|i| s.char_at(i) == if i % 2 == 0 { a } else { b })
        },
    },
];

/// Positions of the lowest character occurring at least `n` times.
fn n_of_a_kind(seed: &Seed, counts: &FrequencyMap, n: u8) -> Positions {
    counts
        .first_at_least(n)
        .map_or(Positions::none(), |digit| Positions::of_digits(seed, &[digit]))
}

/// Positions of `take` characters with each exact count, lowest characters
/// first. Yields nothing unless every group can be filled.
fn groups(seed: &Seed, counts: &FrequencyMap, wanted: &[(u8, usize)]) -> Positions {
    let mut digits = Vec::new();
    for &(count, take) in wanted {
        let picked: Vec<u8> = counts.digits_exactly(count).take(take).collect();
        if picked.len() < take {
            return Positions::none();
        }
        digits.extend(picked);
    }
    Positions::of_digits(seed, &digits)
}

/// Every paired character, provided there are exactly `pairs` of them.
fn all_pairs_when(seed: &Seed, counts: &FrequencyMap, pairs: usize) -> Positions {
    let digits: Vec<u8> = counts.digits_exactly(2).collect();
    if digits.len() != pairs {
        return Positions::none();
    }
    Positions::of_digits(seed, &digits)
}

/// The lowest triple together with every pair.
fn full_house(seed: &Seed, counts: &FrequencyMap) -> Positions {
    let Some(triple) = counts.digits_exactly(3).next() else {
        return Positions::none();
    };
    let mut digits: Vec<u8> = counts.digits_exactly(2).collect();
    if digits.is_empty() {
        return Positions::none();
    }
    digits.push(triple);
    Positions::of_digits(seed, &digits)
}
