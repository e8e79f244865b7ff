use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "errnotify", author, version, about, long_about = None)]
pub struct Cli {
    /// Force debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Classify one error and show the resulting notification
    Classify(ClassifyArgs),
    /// Route a set of sample errors through a live notifier
    Demo {
        /// Simulate a client without connectivity
        #[arg(long)]
        offline: bool,
        /// Override the auto-close delay (milliseconds)
        #[arg(long)]
        auto_close_ms: Option<u64>,
    },
    /// Theme state helpers
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    /// Where the error came from
    #[arg(long, value_enum, default_value_t = Origin::Http)]
    pub origin: Origin,
    /// HTTP status code (http and library origins only)
    #[arg(long)]
    pub status: Option<u16>,
    /// Error message
    #[arg(long)]
    pub message: Option<String>,
    /// Error name (generic origin only)
    #[arg(long, default_value = "Error")]
    pub name: String,
    /// Stack trace line; repeat for several lines
    #[arg(long = "stack-line")]
    pub stack_lines: Vec<String>,
    /// Simulate a client without connectivity
    #[arg(long)]
    pub offline: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Origin {
    Http,
    Library,
    Generic,
    Text,
}

#[derive(clap::Subcommand, Debug)]
pub enum ThemeAction {
    /// Toggle the dark theme and print the root classes
    Toggle {
        /// Start from the dark theme instead of the configured one
        #[arg(long)]
        dark: bool,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize configuration file
    Init {
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
        /// Write to this path instead of the platform default
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show current configuration
    Show,
    /// Validate configuration
    Validate,
}
