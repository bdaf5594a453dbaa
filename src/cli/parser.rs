use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for the Zen Den tracker
#[derive(Parser)]
#[command(
    name = "zenden",
    version = env!("CARGO_PKG_VERSION"),
    about = "Zen Den tracker: check students in and out of the counseling room and report on visits",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print diagnostic logs to stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// History filters, shared by `history` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Grade level (K, 1-8) or "all"
    #[arg(long = "grade")]
    pub grade: Option<String>,

    /// Emotion (e.g. Angry, Sad, Anxious/Worried) or "all"
    #[arg(long = "emotion")]
    pub emotion: Option<String>,

    /// Part of the student name (case-insensitive)
    #[arg(long = "student")]
    pub student: Option<String>,
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

    /// Check a student in
    Checkin {
        /// Student name
        #[arg(long = "student", short = 's')]
        student: String,

        /// Grade level: K or 1-8
        #[arg(long = "grade", short = 'g')]
        grade: String,

        /// Staff member; defaults to the most recently used name
        #[arg(long = "staff")]
        staff: Option<String>,

        /// Visit date (YYYY-MM-DD), default today
        #[arg(long = "date")]
        date: Option<String>,

        /// Check-in time (HH:MM), default now
        #[arg(long = "time")]
        time: Option<String>,

        /// Reason for the visit
        #[arg(long = "reason", short = 'r')]
        reason: String,

        /// How the student is feeling: Angry, Sad, Anxious/Worried, Frustrated, Overwhelmed, Tired, Other
        #[arg(long = "emotion", short = 'e')]
        emotion: Option<String>,
    },

    /// Check a student out
    Checkout {
        /// Visit id (see `zenden current`)
        id: i64,

        /// Checkout time (HH:MM) on the day of the visit, default now
        #[arg(long = "at")]
        at: Option<String>,

        /// Do not ask for confirmation
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Show the students currently in the room
    Current {
        /// Keep the view open and refresh durations periodically
        #[arg(long = "watch", short = 'w')]
        watch: bool,

        /// Stop watching after N refreshes
        #[arg(long = "ticks", requires = "watch", hide = true)]
        ticks: Option<u32>,

        /// Override the refresh interval in seconds
        #[arg(long = "interval", requires = "watch", value_name = "SECS")]
        interval: Option<u64>,
    },

    /// Browse past visits
    History {
        #[command(flatten)]
        filters: FilterArgs,

        /// Show at most N visits
        #[arg(long = "limit")]
        limit: Option<usize>,
    },

    /// Visit statistics
    Dashboard {
        /// First day of the breakdown window (YYYY-MM-DD)
        #[arg(long = "from", value_name = "DATE")]
        from: Option<String>,

        /// Last day of the breakdown window (YYYY-MM-DD)
        #[arg(long = "to", value_name = "DATE")]
        to: Option<String>,
    },

    /// Export visits matching the history filters to CSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output file (default: ./zen-den-visits-<today>.csv)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or clear the recently used staff names
    Staff {
        #[arg(long = "clear", help = "Forget all recent staff names")]
        clear: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Compact the database file")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database statistics")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
