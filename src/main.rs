//! Release Tools CLI
//!
//! A command-line tool for naming, identifying and comparing media releases.

use clap::Parser;
use release_tools::cli::{
    args::{Cli, Commands},
    commands::{compare, identify, name, scan},
};
use release_tools::models::config;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let loaded = config::try_load_config_from(&config::config_file_path());
    let extract_debug = matches!(
        cli.command,
        Commands::Identify { debug: true, .. }
            | Commands::Scan { debug: true, .. }
            | Commands::Name { debug: true, .. }
    ) || loaded.as_ref().is_ok_and(|c| c.extract.debug);

    // Initialize logging
    init_logging(cli.verbose || extract_debug);

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("{}, using defaults", e);
        config::Config::default()
    });

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Commands::Identify { filename, folder, debug: flag } => {
            identify::identify(&filename, &folder, flag || config.extract.debug, format)?;
        }

        Commands::Scan { path, debug: flag } => {
            scan::scan(&path, flag || config.extract.debug, format)?;
        }

        Commands::Name { metadata, filename, folder, debug: flag } => {
            name::name(
                &metadata,
                filename.as_deref(),
                folder.as_deref(),
                flag || config.extract.debug,
                format,
            )?;
        }

        Commands::Compare(args) => {
            compare::compare(&args, &config.output, format)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("release_tools=debug")
    } else {
        EnvFilter::new("release_tools=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
