//! Show level and experience.

use anyhow::Result;
use clap::Parser;
use console::style;

use super::StoreArgs;
use crate::render;

/// Show level and experience
#[derive(Parser, Debug)]
pub struct Profile {}

impl Profile {
    pub fn execute(self, store: &StoreArgs) -> Result<()> {
        let config = store.config();
        let session = store.open_session(&config)?;
        let profile = session.profile();
        let progress = profile.progress();

        println!("{}", render::level(&progress));
        println!("{} {}", style("Total EXP:").bold().cyan(), progress.total_exp);
        if !progress.is_max() {
            println!(
                "{} {}",
                style("Next level in:").bold().cyan(),
                progress.remaining()
            );
        }

        let wins = profile.history.iter().filter(|r| r.is_win()).count();
        println!(
            "{} {} ({} wins, last {} kept)",
            style("Plays:").bold().cyan(),
            profile.history.len(),
            wins,
            mahjong_core::GameConfig::HISTORY_LIMIT
        );

        Ok(())
    }
}
