//! CLI frontend for the Weedfield drift simulation.

mod commands;
mod grid;
mod logging;
mod tui;

use std::process;

use clap::{Parser, Subcommand};

use commands::{FieldArgs, ReportFormat};

#[derive(Parser)]
#[command(
    name = "weeds",
    about = "Weedfield: weeds drifting across a bounded field",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the field evolve in an interactive terminal view (q to stop)
    Run {
        #[command(flatten)]
        field: FieldArgs,
    },

    /// Run without a UI until the tick limit or Ctrl+C, then print the report
    Simulate {
        #[command(flatten)]
        field: FieldArgs,

        /// Stop after this many ticks (default: run until interrupted)
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Print an ASCII frame of the field after every tick
        #[arg(long)]
        frames: bool,

        /// Shutdown report format
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Print a run summary table after the report
        #[arg(long)]
        summary: bool,
    },
}

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { field } => commands::run::run(&field),
        Commands::Simulate {
            field,
            ticks,
            frames,
            format,
            summary,
        } => commands::simulate::run(&field, ticks, frames, format, summary),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
