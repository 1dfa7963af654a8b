//! Hash Mahjong command-line client.
//!
//! Composition root: loads configuration, installs logging and dispatches to
//! one command per subcommand. Game rules live in `mahjong-core`; storage and
//! the play session in `mahjong-runtime`.
//!
//! ```bash
//! # Record a confirmed transaction as a play
//! hash-mahjong play 0x5c0d...0123456789 --block 812733
//!
//! # Evaluate a hash or seed without touching the profile
//! hash-mahjong check 0a1b2c3d4e
//! ```

mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Check, History, Play, Profile, Reset, Rules, StoreArgs, Tasks};

/// Mahjong tiles from the tail of your transaction hash
#[derive(Parser)]
#[command(name = "hash-mahjong")]
#[command(about = "Hash Mahjong rules engine and player profile", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Record a confirmed transaction as a play
    Play(Play),

    /// Evaluate a transaction hash or seed without recording it
    Check(Check),

    /// List the winning patterns
    Rules(Rules),

    /// Show level and experience
    Profile(Profile),

    /// Show daily and weekly task progress
    Tasks(Tasks),

    /// Show recent plays, newest first
    History(History),

    /// Delete the stored profile
    Reset(Reset),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SAVE_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(cmd) => cmd.execute(&cli.store),
        Command::Check(cmd) => cmd.execute(),
        Command::Rules(cmd) => cmd.execute(),
        Command::Profile(cmd) => cmd.execute(&cli.store),
        Command::Tasks(cmd) => cmd.execute(&cli.store),
        Command::History(cmd) => cmd.execute(&cli.store),
        Command::Reset(cmd) => cmd.execute(&cli.store),
    }
}
