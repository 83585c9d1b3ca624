use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use fileplay::cli::{handle_error, init_logging, Args, CliConfig, CliUtils};
use fileplay::Pipeline;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    };

    let report = match Pipeline::new(config.pipeline_config.clone()).run() {
        Ok(report) => report,
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    };

    if config.want_stats() && !config.is_quiet() {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", CliUtils::format_report(&report))
            .context("failed to print statistics")?;
    }

    CliUtils::show_success("All done.", config.is_quiet());

    Ok(())
}
