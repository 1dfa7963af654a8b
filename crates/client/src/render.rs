//! Terminal rendering shared by the commands.

use console::style;
use mahjong_core::{GameError, LevelProgress, MatchResult, Positions, Seed};

const BAR_WIDTH: usize = 24;

/// Tile glyphs of a seed; matching positions are highlighted, the rest dimmed.
pub fn tiles(seed: &Seed, positions: Positions) -> String {
    seed.tiles()
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            let glyph = tile.info().glyph;
            if positions.is_none() {
                style(glyph).to_string()
            } else if positions.is_match(index) {
                style(glyph).green().bold().to_string()
            } else {
                style(glyph).dim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Seed characters with the same highlighting as [`tiles`].
pub fn seed(seed: &Seed, positions: Positions) -> String {
    seed.chars()
        .enumerate()
        .map(|(index, ch)| {
            if positions.is_match(index) {
                style(ch).green().bold().to_string()
            } else {
                style(ch).to_string()
            }
        })
        .collect()
}

pub fn outcome(result: &MatchResult) -> String {
    match result.rule() {
        Some(rule) => style(format!("WIN! {} ({})", rule.name, rule.payout))
            .green()
            .bold()
            .to_string(),
        None => style("NO WIN - TRY AGAIN").red().to_string(),
    }
}

pub fn level(progress: &LevelProgress) -> String {
    if progress.is_max() {
        return format!(
            "{} {} {} EXP",
            style(format!("LV {}", progress.level)).bold().yellow(),
            style("MAX").bold(),
            progress.total_exp
        );
    }
    format!(
        "{} {} {}/{} EXP",
        style(format!("LV {}", progress.level)).bold().yellow(),
        bar(progress.percent()),
        progress.into_level(),
        progress.span()
    )
}

pub fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}]",
        style("#".repeat(filled)).cyan(),
        style("-".repeat(BAR_WIDTH - filled)).dim()
    )
}

/// One-line report of a failure: severity, code and message.
pub fn rejection(err: &impl GameError) -> String {
    let severity = err.severity();
    let mut line = format!(
        "{} {}: {}",
        style(format!("[{}]", severity.as_str())).red().bold(),
        err.error_code(),
        err
    );
    if severity.is_recoverable() {
        line.push_str(" (try again)");
    }
    line
}
