//! List the rule table.

use anyhow::Result;
use clap::Parser;
use console::style;
use mahjong_core::{RULES, evaluate, example_seed, matching_positions, reward_for};

use crate::render;

/// List the winning patterns, highest priority first
#[derive(Parser, Debug)]
pub struct Rules {
    /// Hide example seeds
    #[arg(long)]
    brief: bool,
}

impl Rules {
    pub fn execute(self) -> Result<()> {
        println!("{}", style("=== Rules ===").bold().green());
        println!("{}", style("First matching rule wins.").dim());
        println!();

        for rule in &RULES {
            println!(
                "{} {} {} {}",
                style(format!("#{:>2}", rule.id.get())).dim(),
                style(rule.name).bold(),
                style(rule.payout).yellow(),
                style(format!("+{} EXP", reward_for(Some(rule.id.get())))).green()
            );
            println!("    {}", rule.description);

            if self.brief {
                continue;
            }

            let seed = example_seed(rule.id);
            let positions = matching_positions(rule, &seed);
            print!(
                "    {}  {}",
                render::seed(&seed, positions),
                render::tiles(&seed, positions)
            );
            match evaluate(&seed).rule() {
                Some(winner) if winner.id != rule.id => {
                    println!("  {}", style(format!("(evaluates as #{})", winner.id.get())).dim())
                }
                _ => println!(),
            }
        }

        Ok(())
    }
}
