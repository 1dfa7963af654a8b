//! Record a confirmed transaction as a play.

use anyhow::{Result, bail};
use mahjong_core::GameError;
use clap::Parser;
use console::style;

use super::StoreArgs;
use crate::render;

/// Record a confirmed transaction as a play
#[derive(Parser, Debug)]
pub struct Play {
    /// Hash of the confirmed transaction (0x prefix optional)
    #[arg(value_name = "TX_HASH")]
    tx_hash: String,

    /// Chain id the transaction was sent on (overrides GAME_CHAIN_ID)
    #[arg(long, value_name = "ID")]
    chain_id: Option<String>,

    /// Destination address (overrides GAME_TO_ADDRESS)
    #[arg(long, value_name = "ADDRESS")]
    to: Option<String>,

    /// Ether value sent (overrides GAME_PLAY_VALUE)
    #[arg(long, value_name = "ETH")]
    value: Option<String>,

    /// Block the transaction was included in
    #[arg(long, value_name = "NUMBER")]
    block: Option<u64>,
}

impl Play {
    pub fn execute(self, store: &StoreArgs) -> Result<()> {
        let config = store.config();
        let mut receipt = config.receipt(self.tx_hash, self.block);
        if let Some(chain_id) = self.chain_id {
            receipt.chain_id = chain_id;
        }
        if let Some(to) = self.to {
            receipt.to = to;
        }
        if let Some(value) = self.value {
            receipt.value = value;
        }

        let mut session = store.open_session(&config)?;
        let report = match session.play(&receipt) {
            Ok(report) => report,
            Err(err) => {
                if err.severity().is_internal() {
                    tracing::error!(code = err.error_code(), "Play failed: {}", err);
                }
                bail!(
                    "Failed to record play for {}: {}",
                    receipt.tx_hash,
                    render::rejection(&err)
                );
            }
        };

        let positions = report.outcome.positions();
        println!(
            "{} {}",
            style("Seed:").bold().cyan(),
            render::seed(&report.seed, positions)
        );
        println!("  {}", render::tiles(&report.seed, positions));
        println!();
        println!("{}", render::outcome(&report.outcome));
        println!(
            "{} {}",
            style("EXP:").bold().cyan(),
            style(format!("+{}", report.base_exp)).green()
        );

        for task in &report.completed_tasks {
            println!(
                "  {} {} {}",
                style("✓").green(),
                task.name,
                style(format!("+{} EXP", task.reward)).green()
            );
        }
        if report.bonus_exp < report.completed_tasks.iter().map(|t| t.reward).sum::<u64>()
            || report.base_exp < report.base_reward
        {
            println!("  {}", style("Level cap reached, experience withheld").dim());
        }

        println!();
        if report.leveled_up() {
            println!(
                "{}",
                style(format!(
                    "LEVEL UP! {} → {}",
                    report.level_before, report.level_after
                ))
                .yellow()
                .bold()
            );
        }
        println!("{}", render::level(&session.profile().progress()));

        Ok(())
    }
}
