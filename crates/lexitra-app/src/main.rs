use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod workspace;

use commands::run::RunArgs;

#[derive(Parser)]
#[command(
    name = "lexitra",
    version,
    about = "Batch-translate structured config files with a key dictionary"
)]
struct Cli {
    /// Show per-key substitution and merge detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge the key table into the dictionary and translate the input directory
    Run(RunArgs),
    /// Create the workspace directories and starter files
    Init,
    /// Run the built-in engine self-check
    Test,
    /// Remove the export and backup directories
    Clean,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Run(args) => commands::run::run(args),
        Command::Init => commands::init::init(),
        Command::Test => commands::selfcheck::selfcheck(),
        Command::Clean => commands::clean::clean(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
