mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("Elementa CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = AppConfig::load(cli.config.as_deref(), &cli.set_values)?;

    let command_result = match cli.command {
        Commands::Element(args) => commands::element::run_show(args),
        Commands::Elements(args) => commands::element::run_list(args),
        Commands::React(args) => {
            info!("Dispatching to 'react' command.");
            commands::react::run(args, &config)
        }
        Commands::Mix(args) => {
            info!("Dispatching to 'mix' command.");
            commands::mix::run(args, &config)
        }
        Commands::Substances(args) => commands::catalog::run_substances(args, &config),
        Commands::Reactions(args) => commands::catalog::run_reactions(args, &config),
        Commands::Balance(args) => commands::balance::run(args),
        Commands::Mass(args) => commands::mass::run(args),
    };

    if let Err(e) = &command_result {
        error!("Command failed: {}", e);
    }
    command_result
}
