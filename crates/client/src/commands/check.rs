//! Evaluate a hash or seed without recording it.

use anyhow::{Result, anyhow};
use clap::Parser;
use console::style;
use mahjong_core::Seed;
use mahjong_runtime::Preview;

use crate::render;

/// Evaluate a transaction hash or seed without recording it
#[derive(Parser, Debug)]
pub struct Check {
    /// Transaction hash, or a bare 10-character seed
    #[arg(value_name = "TX_HASH_OR_SEED")]
    input: String,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let seed = Seed::from_tx_hash(&self.input).map_err(|err| {
            anyhow!(
                "Cannot derive a seed from {:?}: {}",
                self.input,
                render::rejection(&err)
            )
        })?;
        let preview = Preview::of(seed);
        let positions = preview.outcome.positions();

        println!(
            "{} {}",
            style("Seed:").bold().cyan(),
            render::seed(&seed, positions)
        );
        println!("  {}", render::tiles(&seed, positions));
        println!();
        println!("{}", render::outcome(&preview.outcome));
        println!(
            "{} {}",
            style("EXP:").bold().cyan(),
            style(format!("+{}", preview.reward)).green()
        );

        Ok(())
    }
}
