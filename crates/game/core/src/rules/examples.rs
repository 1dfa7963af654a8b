//! Example seeds shown next to each rule.

use super::RuleId;
use crate::seed::Seed;

/// One literal per rule, in id order.
///
/// Every literal evaluates to its own rule except rule 18: any
/// `ABABABABAB` seed holds two characters five times each, so Fivefold
/// Harmony always fires first. Its literal still satisfies the rule's own
/// predicate and is used for highlighting previews.
const EXAMPLES: [&[u8; 10]; 18] = [
    b"0000000000",
    b"1111111110",
    b"2222222200",
    b"3333333000",
    b"4444440000",
    b"5555500000",
    b"0000111122",
    b"0000111222",
    b"0001112223",
    b"0001112233",
    b"0011223344",
    b"0011223345",
    b"0001122334",
    b"0001234567",
    b"0123456789",
    b"012395fedc",
    b"0012442100",
    b"0101010101",
];

/// Example seed illustrating `id`'s pattern.
pub fn example_seed(id: RuleId) -> Seed {
    Seed::from_lower_hex(*EXAMPLES[id.get() as usize - 1])
}
