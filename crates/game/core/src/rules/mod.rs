//! Rule engine: the ordered pattern ladder evaluated against a seed.
//!
//! [`evaluate`] walks [`RULES`] in ascending id order and reports the first
//! rule whose predicate holds. It is a priority ladder, not a best-match
//! search. [`matching_positions`] recomputes which positions form the pattern
//! for highlighting, and can be called for any rule, matched or not.

mod examples;
mod frequency;
mod positions;
mod straight;
mod table;

use core::fmt;

pub use examples::example_seed;
pub use frequency::FrequencyMap;
pub use positions::Positions;
pub use straight::{first_disjoint_pair, first_run, is_run};
pub use table::RULES;

use crate::seed::Seed;

/// Identifier of a rule, 1..=18. Lower ids take priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleId(u8);

impl RuleId {
    /// Returns `None` for ids outside the rule table.
    pub fn new(id: u8) -> Option<Self> {
        (1..=RULES.len() as u8).contains(&id).then_some(Self(id))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn rule(self) -> &'static Rule {
        &RULES[self.0 as usize - 1]
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Predicate over a seed and its precomputed character counts.
pub type Predicate = fn(&Seed, &FrequencyMap) -> bool;

/// Derives the highlighted positions for a rule.
pub type PositionDeriver = fn(&Seed, &FrequencyMap) -> Positions;

/// A static rule definition. Never mutated; order in [`RULES`] is priority.
#[derive(Debug)]
pub struct Rule {
    pub id: RuleId,
    pub name: &'static str,
    /// Payout multiplier as displayed, e.g. `"10000x"`.
    pub payout: &'static str,
    pub description: &'static str,
    pub predicate: Predicate,
    pub positions: PositionDeriver,
}

impl Rule {
    pub fn test(&self, seed: &Seed) -> bool {
        (self.predicate)(seed, &FrequencyMap::from_seed(seed))
    }

    pub fn summary(&self) -> RuleSummary {
        RuleSummary {
            id: self.id.get(),
            name: self.name.to_string(),
            payout: self.payout.to_string(),
        }
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Rule {}

/// Compact description of a matched rule, as stored in play history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSummary {
    pub id: u8,
    pub name: String,
    pub payout: String,
}

/// Outcome of evaluating a seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    Matched {
        rule: &'static Rule,
        positions: Positions,
    },
}

impl MatchResult {
    pub fn rule(&self) -> Option<&'static Rule> {
        match self {
            Self::NoMatch => None,
            Self::Matched { rule, .. } => Some(rule),
        }
    }

    pub fn rule_id(&self) -> Option<RuleId> {
        self.rule().map(|rule| rule.id)
    }

    /// Highlighted positions; none for a losing seed.
    pub fn positions(&self) -> Positions {
        match self {
            Self::NoMatch => Positions::none(),
            Self::Matched { positions, .. } => *positions,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    pub fn summary(&self) -> Option<RuleSummary> {
        self.rule().map(Rule::summary)
    }
}

/// Counts occurrences of each character in the seed.
pub fn frequency_map(seed: &Seed) -> FrequencyMap {
    FrequencyMap::from_seed(seed)
}

/// Returns the first rule, in id order, whose predicate holds.
pub fn evaluate(seed: &Seed) -> MatchResult {
    let counts = FrequencyMap::from_seed(seed);
    RULES
        .iter()
        .find(|rule| (rule.predicate)(seed, &counts))
        .map_or(MatchResult::NoMatch, |rule| MatchResult::Matched {
            rule,
            positions: (rule.positions)(seed, &counts),
        })
}

/// Positions that take part in `rule`'s pattern on `seed`.
///
/// When several character sets could satisfy the rule, the lowest characters
/// are chosen. A rule whose pattern is absent yields no positions, except the
/// palindrome rule which always marks mirrored pairs.
pub fn matching_positions(rule: &Rule, seed: &Seed) -> Positions {
    (rule.positions)(seed, &FrequencyMap::from_seed(seed))
}

/// Looks up a rule by numeric id.
pub fn rule_by_id(id: u8) -> Option<&'static Rule> {
    RuleId::new(id).map(RuleId::rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(s: &str) -> Seed {
        s.parse().unwrap()
    }

    fn id_of(s: &str) -> Option<u8> {
        evaluate(&seed(s)).rule_id().map(RuleId::get)
    }

    #[test]
    fn table_is_ordered_by_id() {
        for (index, rule) in RULES.iter().enumerate() {
            assert_eq!(rule.id.get() as usize, index + 1);
        }
    }

    #[test]
    fn ten_identical_reports_rule_one_not_a_lower_rule() {
        for &b in crate::GameConfig::ALPHABET {
            let s: String = core::iter::repeat_n(b as char, 10).collect();
            let result = evaluate(&seed(&s));
            assert_eq!(result.rule_id().map(RuleId::get), Some(1), "seed {s}");
            // Lower-priority rules hold too; priority decides.
            assert!(rule_by_id(6).unwrap().test(&seed(&s)));
            assert!(rule_by_id(17).unwrap().test(&seed(&s)));
        }
    }

    #[test]
    fn tenfold_harmony_scenario() {
        let result = evaluate(&seed("0000000000"));
        let rule = result.rule().unwrap();
        assert_eq!(rule.id.get(), 1);
        assert_eq!(rule.name, "Tenfold Harmony");
        assert_eq!(rule.payout, "10000x");
        assert!(result.positions().is_all());
    }

    #[test]
    fn counting_rules_in_priority_order() {
        assert_eq!(id_of("1111111110"), Some(2));
        assert_eq!(id_of("2222222200"), Some(3));
        assert_eq!(id_of("3333333000"), Some(4));
        assert_eq!(id_of("4444440000"), Some(5));
        assert_eq!(id_of("5555500000"), Some(6));
        assert_eq!(id_of("0000111122"), Some(7));
        assert_eq!(id_of("0000111222"), Some(8));
        assert_eq!(id_of("0001112223"), Some(9));
        assert_eq!(id_of("0001112233"), Some(10));
        assert_eq!(id_of("0011223344"), Some(11));
        assert_eq!(id_of("0011223345"), Some(12));
        assert_eq!(id_of("0001122334"), Some(13));
        assert_eq!(id_of("0001234567"), Some(14));
    }

    #[test]
    fn quad_triple_outranks_two_triples() {
        // 4 + 3 + 3 satisfies rules 8, 10 and 14.
        assert_eq!(id_of("0120120120"), Some(8));
    }

    #[test]
    fn triple_outranks_straight() {
        // 0..4 ascending is a straight, but the triple of 5s comes first.
        assert_eq!(id_of("01234555a9"), Some(14));
    }

    #[test]
    fn ascending_digits_are_a_straight() {
        assert_eq!(id_of("0123456789"), Some(15));
        assert_eq!(id_of("fedcba9876"), Some(15));
    }

    #[test]
    fn double_straight_and_palindrome_are_reachable() {
        assert_eq!(id_of("012395fedc"), Some(16));
        assert_eq!(id_of("0012332100"), Some(16));
        assert_eq!(id_of("0012442100"), Some(17));
    }

    #[test]
    fn alternating_pattern_is_shadowed_by_fivefold() {
        let s = seed("0101010101");
        assert!(rule_by_id(18).unwrap().test(&s));
        assert_eq!(evaluate(&s).rule_id().map(RuleId::get), Some(6));
    }

    #[test]
    fn no_match() {
        let result = evaluate(&seed("0a1b2c3d4e"));
        assert_eq!(result, MatchResult::NoMatch);
        assert!(result.positions().is_none());
        assert!(result.summary().is_none());
    }

    #[test]
    fn evaluation_is_deterministic() {
        for s in ["deadbeef00", "0123456789", "0a1b2c3d4e", "ffffffffff"] {
            assert_eq!(evaluate(&seed(s)), evaluate(&seed(s)));
        }
    }

    #[test]
    fn palindrome_positions_mark_mirrored_pairs() {
        let pal = seed("0012442100");
        assert_eq!(pal, pal.reversed());
        assert!(matching_positions(rule_by_id(17).unwrap(), &pal).is_all());

        // Speculative use on a non-palindrome marks only the mirrored matches.
        let near = seed("0123454320");
        let positions = matching_positions(rule_by_id(17).unwrap(), &near);
        assert_eq!(format!("{positions:?}"), "#........#");

        let straight = seed("0123456789");
        assert_ne!(straight, straight.reversed());
        assert!(matching_positions(rule_by_id(17).unwrap(), &straight).is_none());
    }

    #[test]
    fn count_rule_positions() {
        let p = evaluate(&seed("1111111110")).positions();
        assert_eq!(format!("{p:?}"), "#########.");
        let p = evaluate(&seed("0a0a0b0c0d")).positions();
        assert_eq!(evaluate(&seed("0a0a0b0c0d")).rule_id().map(RuleId::get), Some(6));
        assert_eq!(format!("{p:?}"), "#.#.#.#.#.");
    }

    #[test]
    fn fivefold_tie_picks_lowest_character() {
        let p = matching_positions(rule_by_id(6).unwrap(), &seed("f0f0f0f0f0"));
        assert_eq!(format!("{p:?}"), ".#.#.#.#.#");
    }

    #[test]
    fn group_rule_positions() {
        let p = evaluate(&seed("0000111122")).positions();
        assert_eq!(format!("{p:?}"), "########..");
        // Only the lowest triple joins the quad.
        let p = evaluate(&seed("0120120120")).positions();
        assert_eq!(format!("{p:?}"), "##.##.##.#");
        let p = evaluate(&seed("0001112223")).positions();
        assert_eq!(format!("{p:?}"), "#########.");
        let p = evaluate(&seed("0001112233")).positions();
        assert_eq!(format!("{p:?}"), "######....");
        let p = evaluate(&seed("0001122334")).positions();
        assert_eq!(format!("{p:?}"), "#########.");
        let p = evaluate(&seed("0001234567")).positions();
        assert_eq!(format!("{p:?}"), "###.......");
    }

    #[test]
    fn two_triples_pick_lowest_characters() {
        // Three triples would be rule 9; as a speculative rule-10 query the
        // two lowest triples are highlighted.
        let p = matching_positions(rule_by_id(10).unwrap(), &seed("2221110003"));
        assert_eq!(format!("{p:?}"), "...######.");
    }

    #[test]
    fn pair_rule_positions() {
        let p = evaluate(&seed("0011223344")).positions();
        assert!(p.is_all());
        let p = evaluate(&seed("0011223345")).positions();
        assert_eq!(format!("{p:?}"), "########..");
    }

    #[test]
    fn straight_positions() {
        let p = evaluate(&seed("aa98765b0c")).positions();
        assert_eq!(evaluate(&seed("aa98765b0c")).rule_id().map(RuleId::get), Some(15));
        assert_eq!(format!("{p:?}"), ".#####....");
        let p = evaluate(&seed("012395fedc")).positions();
        assert_eq!(format!("{p:?}"), "####..####");
    }

    #[test]
    fn speculative_positions_without_pattern_are_empty() {
        let s = seed("0a1b2c3d4e");
        for id in 1..=16 {
            let p = matching_positions(rule_by_id(id).unwrap(), &s);
            if id == 1 {
                assert!(p.is_all());
            } else {
                assert!(p.is_none(), "rule {id}");
            }
        }
    }

    #[test]
    fn rule_lookup() {
        assert!(rule_by_id(0).is_none());
        assert!(rule_by_id(19).is_none());
        assert_eq!(rule_by_id(18).unwrap().name, "Alternating AB");
        assert_eq!(RuleId::new(7).unwrap().to_string(), "#7");
    }
}
