//! Helmgen CLI Binary
//!
//! Scans a directory tree and runs every generator referenced by a
//! `helm:generate` comment directive.

use clap::Parser;
use helmgen::cli::{self, Cli};
use helmgen::config::HelmgenConfig;
use helmgen::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // An explicitly requested config file must load; the implicit one in the
    // scanned root is optional.
    let file_config = match cli::load_config(&cli) {
        Ok(config) => config,
        Err(e) if cli.config.is_some() => {
            eprintln!("helmgen: {}", e);
            process::exit(1);
        }
        Err(_) => HelmgenConfig::default(),
    };

    let logging_config = cli::build_logging_config(&cli, file_config.logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("helmgen: failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("scanning {} for generator directives", cli.dir.display());

    match helmgen::walk(&cli.dir) {
        Ok(executed) => {
            info!("walk completed, {} generator(s) executed", executed);
            println!("{}", cli::format_summary(executed, &cli.format));
        }
        Err(e) => {
            error!("walk aborted: {}", e);
            eprintln!(
                "helmgen: {} ({} generator(s) executed before the failure)",
                e, e.executed
            );
            process::exit(1);
        }
    }
}
