use crate::types::{ColorMode, LogLevel, SortKey, StatusFilter};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "neuro")]
#[command(about = "Submit and monitor jobs on the Neuromation platform", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace directory holding config.toml and snapshot/ [env: NEURO_PATH]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Overrides `display.color` from the config file
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List storage directory contents
    Ls {
        #[arg(default_value = "storage:")]
        path: String,

        /// Long listing: permission, size, modification time
        #[arg(short = 'l')]
        long: bool,

        /// Sizes as 1.0K, 2.3M, ...
        #[arg(long = "human-readable", short = 'H')]
        human_readable: bool,

        #[arg(long, default_value = "name")]
        sort: SortKey,

        /// One entry per line, even on a terminal
        #[arg(short = '1')]
        one_per_line: bool,
    },

    /// List jobs
    Ps {
        /// Repeatable; defaults to pending and running
        #[arg(short, long)]
        status: Vec<StatusFilter>,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Column spec, e.g. "{id;max=30}{status}{when}"
        #[arg(long)]
        format: Option<String>,

        /// Cut lines to this width; 0 disables cutting
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Show job details
    Status { job: String },

    /// Show resource usage of a job
    Top { job: String },

    /// Follow a job until it starts running
    Submit {
        job: String,

        /// Milliseconds between polls
        #[arg(long, default_value = "500")]
        poll_interval: u64,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
}
