use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
/// CLI application to record daily check-ins in per-day attendance ledgers
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: record student and instructor check-ins in per-day ledgers",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or portable setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, data directory and roster database
    Init {
        /// Custom roster database path
        #[arg(long = "db")]
        db: Option<String>,
    },

    /// View or edit the configuration (schedule windows, cycle order)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long, help = "Shift to update: morning or afternoon")]
        shift: Option<String>,

        #[arg(long, help = "Entry time for the selected shift (HH:MM)")]
        entry: Option<String>,

        #[arg(long, help = "Tolerance time for the selected shift (HH:MM)")]
        tolerance: Option<String>,

        #[arg(
            long = "cycle-order",
            help = "Cohort seeding order, comma separated (e.g. 1,2,3,7)"
        )]
        cycle_order: Option<String>,
    },

    /// Manage the member roster
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },

    /// Record a check-in for a member
    Checkin {
        /// Member code
        code: String,

        /// Ledger date (DD-MM-YYYY, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Check-in time (HH:MM, defaults to now)
        #[arg(long)]
        time: Option<String>,

        /// Mark a tardy check-in as justified
        #[arg(long)]
        justified: bool,
    },

    /// Print a day's ledger
    Show {
        /// Ledger date (DD-MM-YYYY, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Export a day's ledger
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Ledger date (DD-MM-YYYY, defaults to today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal audit log")]
        print: bool,
    },

    /// Back up the roster database and ledger documents
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum RosterAction {
    /// Add a member
    Add {
        /// Member code (stable identifier)
        code: String,

        #[arg(long)]
        first: String,

        #[arg(long)]
        last: String,

        #[arg(long, default_value = "student", help = "Role: student or instructor")]
        role: String,

        #[arg(long, help = "Cohort name (students only)")]
        cycle: Option<String>,

        #[arg(long, help = "Shift: morning or afternoon (students only)")]
        shift: Option<String>,

        #[arg(long, help = "Scheduled weekdays, comma separated (Mon,Tue,...)")]
        days: Option<String>,
    },

    /// List members
    List {
        #[arg(long, help = "Include deactivated members")]
        all: bool,
    },

    /// Deactivate a member
    Remove {
        code: String,
    },
}
