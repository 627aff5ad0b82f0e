use clap::{Parser, Subcommand};

/// Command-line interface definition for studylog
/// CLI application to track weekly study priorities and work sessions with SQLite
#[derive(Parser)]
#[command(
    name = "studylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track weekly study priorities and a single global work timer using SQLite",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Manage priority items (recurring weekly obligations)
    #[command(subcommand)]
    Item(ItemCmd),

    /// Manage standalone study resource links
    #[command(subcommand)]
    Link(LinkCmd),

    /// Control the global work timer
    #[command(subcommand)]
    Timer(TimerCmd),

    /// List work sessions for a civil month (defaults to the current one)
    Sessions {
        #[arg(long, help = "Year of the month to list (e.g. 2024)")]
        year: Option<i32>,

        #[arg(long, help = "Month to list (1-12)")]
        month: Option<u32>,

        #[arg(long, help = "Print the sessions as JSON")]
        json: bool,
    },

    /// Total recorded minutes for a civil month
    Summary {
        #[arg(long, help = "Year of the month to summarize (e.g. 2024)")]
        year: i32,

        #[arg(long, help = "Month to summarize (1-12)")]
        month: u32,
    },
}

#[derive(Subcommand)]
pub enum ItemCmd {
    /// Add a new priority item
    Add {
        /// Label / book name
        book: String,

        /// Due weekday: 0=Monday … 6=Sunday
        #[arg(long)]
        weekday: u32,

        /// Due hour (0-23)
        #[arg(long, default_value_t = 0)]
        hour: u32,

        /// Due minute (0-59)
        #[arg(long, default_value_t = 0)]
        minute: u32,

        /// Sub-task flag, NAME or NAME=true/false (repeatable)
        #[arg(long = "flag", value_name = "NAME[=BOOL]")]
        flags: Vec<String>,

        /// Related link (repeatable, order preserved)
        #[arg(long = "link", value_name = "URL")]
        links: Vec<String>,

        /// Free-text memo
        #[arg(long)]
        memo: Option<String>,
    },

    /// List items annotated with effective due / status
    List {
        /// Filter by book-name substring
        #[arg(long, short)]
        query: Option<String>,

        /// Print the annotated items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one item in detail
    Show {
        id: i64,

        /// Print the annotated item as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an existing item (only the given fields change)
    Edit {
        id: i64,

        #[arg(long)]
        book: Option<String>,

        /// Due weekday: 0=Monday … 6=Sunday
        #[arg(long)]
        weekday: Option<u32>,

        #[arg(long)]
        hour: Option<u32>,

        #[arg(long)]
        minute: Option<u32>,

        /// Replace ALL flags with this set (repeatable)
        #[arg(long = "flag", value_name = "NAME[=BOOL]", conflicts_with = "clear_flags")]
        flags: Vec<String>,

        /// Replace ALL links with this list (repeatable)
        #[arg(long = "link", value_name = "URL", conflicts_with = "clear_links")]
        links: Vec<String>,

        #[arg(long, conflicts_with = "clear_memo")]
        memo: Option<String>,

        #[arg(long = "clear-flags")]
        clear_flags: bool,

        #[arg(long = "clear-links")]
        clear_links: bool,

        #[arg(long = "clear-memo")]
        clear_memo: bool,
    },

    /// Delete an item (hard delete)
    Del { id: i64 },

    /// Mark an item complete for the current week
    Complete { id: i64 },

    /// Clear an item's completion marker
    Uncomplete { id: i64 },
}

#[derive(Subcommand)]
pub enum LinkCmd {
    /// Add a resource link
    Add {
        /// Display title
        title: String,

        #[arg(long)]
        url: String,

        /// Optional grouping label (e.g. "reference", "podcast")
        #[arg(long)]
        category: Option<String>,
    },

    /// List all resource links
    List {
        /// Print the links as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a link (only the given fields change)
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long, conflicts_with = "clear_category")]
        category: Option<String>,

        #[arg(long = "clear-category")]
        clear_category: bool,
    },

    /// Delete a link (hard delete)
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum TimerCmd {
    /// Start the global timer (fails if one is already running)
    Start {
        #[arg(long)]
        memo: Option<String>,
    },

    /// Stop the running timer
    Stop,

    /// Show the running timer, if any
    Status,

    /// Correct a recorded session (start/end/memo)
    Correct {
        id: i64,

        /// New start, "YYYY-MM-DD HH:MM[:SS]"
        #[arg(long = "start", value_name = "TIMESTAMP")]
        started: String,

        /// New end, "YYYY-MM-DD HH:MM[:SS]"
        #[arg(long = "end", value_name = "TIMESTAMP")]
        ended: String,

        #[arg(long)]
        memo: Option<String>,
    },

    /// Delete a session by ID (hard delete)
    Del { id: i64 },
}
