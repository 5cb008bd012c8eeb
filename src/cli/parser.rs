use crate::export::ExportFormat;
use crate::store::Backend;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worktimer
#[derive(Parser)]
#[command(
    name = "worktimer",
    version = env!("CARGO_PKG_VERSION"),
    about = "A work-session stopwatch: start, pause, continue and stop, with a daily summary in SQLite or JSON",
    long_about = None
)]
pub struct Cli {
    /// Override the data folder (useful for tests or a one-off store)
    #[arg(global = true, long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// Override the storage backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the store
    Init,

    /// Interactive timer: start, pause, continue, stop
    Run {
        /// Override the reminder interval in seconds (0 disables reminders)
        #[arg(long = "remind", value_name = "SECS")]
        remind: Option<u64>,
    },

    /// Show sessions count and total time per day
    Summary,

    /// List every recorded session
    List,

    /// Export recorded sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Move the store to another folder (existing sessions stay where they are)
    Relocate {
        /// Target folder (must exist)
        dir: String,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table (sqlite backend)
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Maintain the database (sqlite backend)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Create a backup copy of the store file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
