//! Straight detection over adjacent seed positions.
//!
//! A run of length `len` starting at `start` is ascending when
//! `value[start + j] == value[start] + j` for every `j` in `1..len`, and
//! descending when `value[start + j] == value[start] - j`.

use crate::config::GameConfig;
use crate::seed::Seed;

type Values = [u8; GameConfig::SEED_LEN];

/// Whether positions `start..start + len` form an ascending or descending run.
pub fn is_run(values: &Values, start: usize, len: usize) -> bool {
    if len == 0 || start + len > values.len() {
        return false;
    }
    let base = i16::from(values[start]);
    let (mut asc, mut desc) = (true, true);
    for j in 1..len {
        let v = i16::from(values[start + j]);
        let step = j as i16;
        asc &= v == base + step;
        desc &= v == base - step;
    }
    asc || desc
}

/// Start positions of every run of length `len`, ascending.
pub fn run_starts(seed: &Seed, len: usize) -> impl Iterator<Item = usize> {
    let values = seed.hex_values();
    let last = values.len().saturating_sub(len);
    (0..=last).filter(move |&start| is_run(&values, start, len))
}

/// First run of length `len`, if any.
pub fn first_run(seed: &Seed, len: usize) -> Option<usize> {
    run_starts(seed, len).next()
}

/// First pair of runs of length `len` whose position ranges do not overlap.
///
/// Pairs are searched in `(a, b)` order with `a < b`, so the earliest run that
/// has any disjoint partner wins, paired with its earliest partner.
pub fn first_disjoint_pair(seed: &Seed, len: usize) -> Option<(usize, usize)> {
    let starts: Vec<usize> = run_starts(seed, len).collect();
    starts.iter().enumerate().find_map(|(i, &a)| {
        starts[i + 1..]
            .iter()
            .find(|&&b| a + len <= b)
            .map(|&b| (a, b))
    })
}
