//! Experience rewarded per play.
//!
//! Rarer, higher-payout rules grant more experience. Losing plays and ids
//! outside the table receive the consolation amount.

use crate::config::GameConfig;
use crate::rules::MatchResult;

/// Experience per rule, indexed by `id - 1`.
const EXP_BY_RULE: [u64; 18] = [
    5000, // Tenfold Harmony
    2000, // Ninefold Harmony
    800,  // Eightfold Harmony
    400,  // Sevenfold Harmony
    200,  // Sixfold Harmony
    100,  // Fivefold Harmony
    300,  // Double Quads
    250,  // Quad + Triple
    180,  // Three Triples
    80,   // Two Triples
    60,   // Five Pairs
    40,   // Four Pairs
    50,   // Full House
    25,   // Any Triple
    45,   // Straight-5
    70,   // Double Straight-4
    90,   // Palindrome
    75,   // Alternating AB
];

/// Experience for a matched rule id, or the consolation amount.
pub fn reward_for(rule_id: Option<u8>) -> u64 {
    rule_id
        .and_then(|id| (id as usize).checked_sub(1))
        .and_then(|index| EXP_BY_RULE.get(index).copied())
        .unwrap_or(GameConfig::CONSOLATION_EXP)
}

/// Experience for an evaluation outcome.
pub fn reward_for_match(result: &MatchResult) -> u64 {
    reward_for(result.rule_id().map(|id| id.get()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::evaluate;

    #[test]
    fn tenfold_harmony_grants_top_reward() {
        let result = evaluate(&"0000000000".parse().unwrap());
        assert_eq!(reward_for_match(&result), 5000);
    }

    #[test]
    fn straight_reward() {
        let result = evaluate(&"0123456789".parse().unwrap());
        assert_eq!(result.rule_id().map(|id| id.get()), Some(15));
        assert_eq!(reward_for_match(&result), 45);
    }

    #[test]
    fn no_match_and_unknown_ids_get_consolation() {
        assert_eq!(reward_for(None), 5);
        assert_eq!(reward_for(Some(0)), 5);
        assert_eq!(reward_for(Some(19)), 5);
        assert_eq!(reward_for(Some(255)), 5);
        let result = evaluate(&"0a1b2c3d4e".parse().unwrap());
        assert_eq!(reward_for_match(&result), 5);
    }

    #[test]
    fn every_rule_is_priced_within_range() {
        for id in 1..=18 {
            let exp = reward_for(Some(id));
            assert!((25..=5000).contains(&exp), "rule {id}: {exp}");
        }
    }
}
