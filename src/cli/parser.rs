use crate::export::ExportFormat;
use crate::models::filter::TimeWindow;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for habitlog
#[derive(Parser)]
#[command(
    name = "habitlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log habits in a session-scoped SQLite store, summarize them, get AI feedback, extract text from screenshots",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB, ":memory:" for RAM only)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable debug logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Defaults to `session` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and check the database location
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration (API key masked)")]
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

    /// Start an interactive habit logging session (the store is wiped at start)
    Session,

    /// Extract text from screenshots (PNG/JPEG) through Tesseract
    Ocr {
        /// Images to process; without images an interactive prompt asks for paths
        images: Vec<String>,

        /// Output text file (single image only; default from config)
        #[arg(long, short = 'o', value_name = "FILE")]
        out: Option<String>,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// OCR language model (default: eng)
        #[arg(long = "lang")]
        language: Option<String>,

        /// OCR engine executable (default: tesseract)
        #[arg(long = "engine")]
        engine: Option<String>,
    },
}

/// One line typed inside an interactive session.
#[derive(Parser)]
#[command(
    name = "habitlog>",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Habit + time window selection shared by every view command.
#[derive(Args, Clone, Debug)]
pub struct ViewArgs {
    /// Habit to keep, or "all"
    #[arg(long, default_value = "all")]
    pub habit: String,

    /// Time range: week (7 days), fortnight (14) or month (30)
    #[arg(long, short = 'w', value_enum)]
    pub window: Option<TimeWindow>,

    /// Explicit first date (YYYY-MM-DD) instead of a window
    #[arg(long, conflicts_with = "window")]
    pub since: Option<String>,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Log an activity interval
    Add {
        /// Habit / task label (stored trimmed and lowercase)
        #[arg(required = true, num_args = 1..)]
        habit: Vec<String>,

        /// Start time (HH:MM)
        #[arg(long = "start", short = 's', default_value = "14:00")]
        start: String,

        /// End time (HH:MM)
        #[arg(long = "end", short = 'e', default_value = "14:45")]
        end: String,

        /// Date (YYYY-MM-DD), default today
        #[arg(long = "date", short = 'd')]
        date: Option<String>,
    },

    /// List the entries of the filtered view
    List(ViewArgs),

    /// Total hours per habit
    Summary(ViewArgs),

    /// Hours per day and habit as a bar chart
    Chart(ViewArgs),

    /// Distinct habits logged in this session
    Habits,

    /// Export the filtered view
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export per-day totals instead of single entries
        #[arg(long)]
        chart: bool,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Ask the AI coach for feedback on the filtered view
    Feedback(ViewArgs),

    /// Store information (entries, date range)
    Info,

    /// Delete ALL entries of the session
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Close the session
    #[command(alias = "quit")]
    Exit,
}
