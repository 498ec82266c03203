use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for tasclock
#[derive(Parser)]
#[command(
    name = "tasclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Time-clock punch ledger: record and list badge punches using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a punch from a terminal
    Punch {
        #[arg(long, help = "Badge id (e.g. 28DC3FB8)")]
        badge: String,

        #[arg(long, help = "Terminal id recording the punch (0 = administrative override)")]
        terminal: i64,

        #[arg(
            long = "type",
            value_name = "TYPE",
            help = "Event type: in, out, timeout"
        )]
        event_type: String,

        #[arg(
            long = "at",
            value_name = "TIMESTAMP",
            help = "Punch time (YYYY-MM-DD HH:MM:SS); defaults to now"
        )]
        at: Option<String>,
    },

    /// Show a single punch by id
    Show {
        id: i64,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// List the punches of a badge for one day
    Day {
        #[arg(long, help = "Badge id")]
        badge: String,

        #[arg(long, value_name = "DATE", help = "Day to list (YYYY-MM-DD); defaults to today")]
        date: Option<String>,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// List the punches of a badge between two dates
    Range {
        #[arg(long, help = "Badge id")]
        badge: String,

        #[arg(long, value_name = "DATE", help = "First day (YYYY-MM-DD)")]
        from: String,

        #[arg(long, value_name = "DATE", help = "Last day (YYYY-MM-DD)")]
        to: String,
    },

    /// Show an employee by id or badge
    #[command(group(ArgGroup::new("key").required(true).args(["id", "badge"])))]
    Employee {
        #[arg(long, help = "Employee id")]
        id: Option<i64>,

        #[arg(long, help = "Badge id")]
        badge: Option<String>,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
}
