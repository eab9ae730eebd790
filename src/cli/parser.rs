use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rworkout
#[derive(Parser)]
#[command(
    name = "rworkout",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute distance, mean speed and calories for running, walking and swimming sessions",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the summary of a single session
    Calc {
        /// Workout kind tag: RUN, WLK or SWM
        kind: String,

        /// Payload values in order (see `rworkout kinds`)
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,
    },

    /// Run the built-in sample sessions
    Demo {
        #[arg(long = "json", help = "Print the summaries as JSON")]
        json: bool,
    },

    /// Process every package of an input file (CSV, JSON or YAML)
    Batch {
        #[arg(long, value_name = "FILE")]
        input: String,

        #[arg(long = "json", help = "Print the summaries as JSON")]
        json: bool,
    },

    /// Process an input file and write the summaries to a file
    Export {
        #[arg(long, value_name = "FILE")]
        input: String,

        #[arg(long, value_enum, help = "Output format (default from configuration)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// List the supported workout kinds and their payloads
    Kinds,

    /// Create the default configuration file
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
