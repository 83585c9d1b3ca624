//! Command-line interface module

use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

use crate::conversion::{PipelineConfig, PipelineReport};
use crate::error::{PipelineError, PipelineResult};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "fileplay")]
#[command(about = "Convert fixed-width district records to CSV, JSON and SQLite")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Project root holding gemeinden.txt (outputs are written next to it)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Print per-stage statistics after the run
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub pipeline_config: PipelineConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> PipelineResult<Self> {
        let show_progress = !args.quiet && atty::is(atty::Stream::Stderr);
        let pipeline_config = PipelineConfig::from_root(&args.root).with_progress(show_progress);

        pipeline_config
            .validate()
            .map_err(PipelineError::configuration)?;

        Ok(Self {
            args,
            pipeline_config,
        })
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }
}

/// Default log filter for the given verbosity flags. `RUST_LOG` wins when set.
pub fn default_log_filter(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "fileplay=debug"
    } else if quiet {
        "warn"
    } else {
        "fileplay=info"
    }
}

/// Install the stderr tracing subscriber.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose, quiet)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Render the per-stage report as aligned text lines
    pub fn format_report(report: &PipelineReport) -> String {
        let mut out = String::from("Pipeline Statistics:\n");
        for stage in &report.stages {
            out.push_str(&format!(
                "  {:<13} {:>7} records  {:>8}",
                stage.stage.as_str(),
                stage.records,
                Self::format_duration(stage.elapsed)
            ));
            if let Some(bytes) = stage.bytes_written {
                out.push_str(&format!("  {} bytes", bytes));
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "  total         {}\n",
            Self::format_duration(report.total_elapsed())
        ));
        out
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &PipelineError) {
    CliUtils::show_error(&error.user_message());

    match error {
        PipelineError::Configuration { .. } => {
            eprintln!("\nTip: pass the directory that contains gemeinden.txt as ROOT");
        }
        PipelineError::Database { .. } => {
            eprintln!("\nTip: the DISTRICTS(ID, NAME) table must exist before the run");
        }
        _ => {}
    }

    eprintln!("\nTry 'fileplay --help' for usage information.");
}
