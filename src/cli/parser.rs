use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rCalendar
#[derive(Parser)]
#[command(
    name = "rcalendar",
    version = env!("CARGO_PKG_VERSION"),
    about = "Month-grid calendar of technician visits with a client roster, stored as local JSON",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a second calendar)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Show the month grid
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,

        /// Move one month forward (repeatable)
        #[arg(long, short, action = ArgAction::Count)]
        next: u8,

        /// Move one month back (repeatable)
        #[arg(long, short, action = ArgAction::Count)]
        prev: u8,

        /// Disable ANSI colours
        #[arg(long = "no-color")]
        no_color: bool,
    },

    /// Manage scheduled events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Manage the client roster
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },

    /// Print the internal activity log
    Log {
        /// Print entries from the internal log
        #[arg(long = "print", help = "Print the internal activity log")]
        print: bool,
    },

    /// Write a snapshot of every store to a file
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip
        #[arg(long)]
        compress: bool,
    },

    /// Export events
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD, ranges start:end of
        /// the same shape, or `all`. If omitted, every event is exported.
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Add an event on a day
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        /// Event type; defaults to the configured `default_event_type`
        #[arg(long = "type")]
        kind: Option<String>,

        /// Client name, must be in the roster
        #[arg(long)]
        client: Option<String>,

        /// Visit address
        #[arg(long)]
        address: Option<String>,

        /// Assigned technician
        #[arg(long)]
        technician: Option<String>,

        /// Free-text notes
        #[arg(long)]
        description: Option<String>,
    },

    /// List events with their index
    List {
        /// Filter by period (YYYY, YYYY-MM, YYYY-MM-DD, ranges, or `all`)
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Delete an event by index
    Del {
        /// Index as shown by `event list`
        index: usize,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ClientAction {
    /// Register a client
    Add {
        /// Client name (unique, case-insensitive)
        name: String,

        /// Contact details (phone, e-mail...)
        contact: Option<String>,
    },

    /// Show the roster
    List {
        /// Show the selectable option set used when adding events
        #[arg(long)]
        options: bool,
    },

    /// Delete a client by index (events are kept)
    Del {
        /// Index as shown by `client list`
        index: usize,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}
