//! Show recent plays.

use anyhow::Result;
use clap::Parser;
use console::style;

use super::StoreArgs;

/// Show recent plays, newest first
#[derive(Parser, Debug)]
pub struct History {
    /// Number of plays to show
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,
}

impl History {
    pub fn execute(self, store: &StoreArgs) -> Result<()> {
        let config = store.config();
        let session = store.open_session(&config)?;
        let history = &session.profile().history;

        if history.is_empty() {
            println!("{}", style("No plays yet").dim());
            return Ok(());
        }

        for (number, record) in history.newest_first().take(self.limit) {
            let outcome = match &record.rule {
                Some(rule) => style(format!("{} ({})", rule.name, rule.payout))
                    .green()
                    .to_string(),
                None => style("no win").dim().to_string(),
            };
            println!(
                "{} {} {} {}",
                style(format!("#{number}")).bold(),
                style(record.timestamp.format("%Y-%m-%d %H:%M")).dim(),
                style(record.seed).cyan(),
                outcome
            );
            println!("    {}", style(&record.tx_hash).dim());
        }

        Ok(())
    }
}
