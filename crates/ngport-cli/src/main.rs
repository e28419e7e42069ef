//! ngport CLI.

use clap::Parser;
use ngport_cli::logging::{init_logging, level_from_env, LogConfig};
use ngport_cli::{run, PortConfig};
use tracing::{debug, Level};

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));
    debug!("ngport v{} starting", env!("CARGO_PKG_VERSION"));

    let config = PortConfig::default();
    let exit_code = match run(&config) {
        Ok(_) => {
            println!(
                "Angular files generated in '{}/' folder.",
                config.output_dir_name()
            );
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
///
/// Precedence: `--log-level`, then `-v`/`-q`, then `NGPORT_LOG_LEVEL`.
/// `RUST_LOG` applies only when no flag was given.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.is_some() || cli.verbose || cli.quiet;
    let level = if let Some(level) = cli.log_level {
        level.into()
    } else if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        level_from_env()
    };
    LogConfig {
        use_env_filter: !explicit,
        ..LogConfig::default()
    }
    .with_level(level)
    .with_ansi(!cli.no_color)
}
