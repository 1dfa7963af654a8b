//! Delete the stored profile.
//!
//! Safety: prompts for confirmation unless `--yes` is given.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use console::style;

use super::StoreArgs;

/// Delete the stored profile
#[derive(Parser, Debug)]
pub struct Reset {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

impl Reset {
    pub fn execute(self, store: &StoreArgs) -> Result<()> {
        let config = store.config();
        let mut session = store.open_session(&config)?;

        let profile = session.profile();
        println!(
            "Level {} with {} EXP and {} recorded plays will be deleted.",
            profile.level(),
            profile.total_exp,
            profile.history.len()
        );

        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        session.reset()?;
        println!("{}", style("✓ Profile reset").green().bold());

        Ok(())
    }
}

fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
