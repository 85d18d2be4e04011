//! brredit CLI - BRR sample editor
//!
//! Command-line front end for the brredit sample editing core.

use clap::Parser;
use env_logger::Env;

use brredit::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("brredit v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Convert {
            input,
            output,
            depth,
        } => commands::convert(&input, &output, depth),
        Commands::Info { path } => commands::info(&path),
        Commands::DetectPitch { path, apply } => commands::detect_pitch(&path, apply),
        Commands::Resample {
            input,
            output,
            rate,
        } => commands::resample(&input, &output, rate),
    }
}
