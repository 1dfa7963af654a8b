//! Show task progress.

use anyhow::Result;
use clap::Parser;
use console::style;
use mahjong_core::{TaskPeriod, TaskStatus};

use super::StoreArgs;

/// Show daily and weekly task progress
#[derive(Parser, Debug)]
pub struct Tasks {}

impl Tasks {
    pub fn execute(self, store: &StoreArgs) -> Result<()> {
        let config = store.config();
        let mut session = store.open_session(&config)?;
        session.refresh()?;

        let tasks = &session.profile().tasks;
        let statuses = tasks.statuses();

        for period in [TaskPeriod::Daily, TaskPeriod::Weekly] {
            let title = match period {
                TaskPeriod::Daily => "Daily",
                TaskPeriod::Weekly => "Weekly",
            };
            println!(
                "{} {}",
                style(format!("=== {title} ===")).bold().green(),
                style(&tasks.period(period).key).dim()
            );
            for status in statuses.iter().filter(|s| s.task.period == period) {
                print_status(status);
            }
            println!();
        }

        Ok(())
    }
}

fn print_status(status: &TaskStatus) {
    let mark = if status.completed {
        style("✓").green()
    } else {
        style("·").dim()
    };
    println!(
        "  {} {:<16} {:>4}/{:<4} {}",
        mark,
        status.task.name,
        status.current.min(status.task.target),
        status.task.target,
        style(format!("+{} EXP", status.task.reward)).green()
    );
    println!("      {}", style(status.task.description).dim());
}
