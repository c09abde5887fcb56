//! cinealign CLI - aligns subtitle timings to a silent film's intertitles.

use clap::{Parser, Subcommand};

mod commands;
mod detections;

#[derive(Parser)]
#[command(
    name = "cinealign",
    version,
    about = "Aligns subtitle timings to a silent film's intertitle cards"
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an ASS subtitle file aligned to the film's intertitles.
    Generate(commands::CmdGenerate),
    /// Show the intertitle ranges in a detection file.
    Inspect(commands::CmdInspect),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match cli.command {
        Command::Generate(cmd) => cmd.run(),
        Command::Inspect(cmd) => cmd.run(),
    }
}
