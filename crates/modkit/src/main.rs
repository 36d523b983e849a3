use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use modkit::commands::{self, CommandResult};
use modkit::logging;

/// modkit CLI - inspect module configs
#[derive(Parser)]
#[command(name = "modkit")]
#[command(about = "Inspect modkit module configs", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Print the module config in its current, normalized shape
    Inspect {
        /// Path to modkit.json (discovered from the current directory if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
    /// List the module's dependencies
    Deps {
        /// Path to modkit.json (discovered from the current directory if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Show only the dependency with this name
        #[arg(short, long)]
        name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate JSON Schema for modkit.json
    Schema {
        /// Output file path (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn execute(command: Commands) -> CommandResult {
    match command {
        Commands::Inspect { config, compact } => commands::run_inspect(config, compact),
        Commands::Deps { config, name, json } => commands::run_deps(config, name, json),
        Commands::Schema { output } => commands::run_schema(output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match execute(cli.command) {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(code)) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
