use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for clubduty
/// CLI application to track club attendance and duty sessions with SQLite
#[derive(Parser)]
#[command(
    name = "clubduty",
    version = env!("CARGO_PKG_VERSION"),
    about = "Club attendance and duty tracking CLI: mark attendance, run duty sessions, manage strikes and leave using SQLite",
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
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

    /// Print the internal audit log
    Audit {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage club members
    User {
        #[command(subcommand)]
        action: UserCmd,
    },

    /// Mark attendance for a member
    Mark {
        /// Member name
        user: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        /// Status: present (p), duty (d), absent (a)
        #[arg(long = "status", default_value = "present")]
        status: String,
    },

    /// Approve an attendance record
    Approve {
        /// Attendance record id
        record_id: i32,

        /// Approving member (core team or teacher)
        #[arg(long = "by")]
        approver: String,
    },

    /// Manage duty sessions
    Duty {
        #[command(subcommand)]
        action: DutyCmd,
    },

    /// Record an hourly check-in for the active duty session
    Checkin {
        /// Member name
        user: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        /// Check-in time (HH:MM), defaults to now
        #[arg(long = "at")]
        at: Option<String>,

        /// What was done in the previous hour
        #[arg(long = "prev", default_value = "")]
        prev: String,

        /// What is planned for the next hour
        #[arg(long = "next", default_value = "")]
        next: String,

        /// Mark this check-in as a break
        #[arg(long = "break")]
        is_break: bool,
    },

    /// Manage strikes
    Strike {
        #[command(subcommand)]
        action: StrikeCmd,
    },

    /// Manage leave requests
    Leave {
        #[command(subcommand)]
        action: LeaveCmd,
    },

    /// Show attendance/duty reports
    Report {
        /// Restrict to a single member
        #[arg(long)]
        user: Option<String>,

        /// Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges like YYYY-MM:YYYY-MM)
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Export report or attendance data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Filter export by year/month/day or a custom range
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Export raw attendance records instead of the club summary
        #[arg(long)]
        attendance: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum UserCmd {
    /// Register a member
    Add {
        name: String,

        /// Role: student, core-team, teacher
        #[arg(long = "role", default_value = "student")]
        role: String,
    },

    /// List members with strike and suspension state
    List,
}

#[derive(Subcommand)]
pub enum DutyCmd {
    /// Start a duty session
    Start {
        user: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        /// Start time (HH:MM), defaults to now
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// End the active duty session
    End {
        user: String,

        /// End date (YYYY-MM-DD), defaults to the session date
        #[arg(long = "date")]
        date: Option<String>,

        /// End time (HH:MM), defaults to now
        #[arg(long = "at")]
        at: Option<String>,

        /// Total break minutes taken during the session
        #[arg(long = "break", default_value_t = 0)]
        break_minutes: i64,
    },

    /// Show the active session, if any
    Status { user: String },

    /// List duty sessions
    List {
        #[arg(long)]
        user: Option<String>,

        #[arg(long, short)]
        period: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum StrikeCmd {
    /// Issue a manual strike
    Issue {
        user: String,

        /// Reason: missed-hourly-log, insufficient-duty-hours, excessive-break, manual
        #[arg(long = "reason", default_value = "manual")]
        reason: String,

        /// Severity: minor, major
        #[arg(long = "severity", default_value = "minor")]
        severity: String,

        #[arg(long = "detail", default_value = "")]
        detail: String,
    },

    /// Resolve a strike (core team / teacher only)
    Resolve {
        strike_id: i32,

        #[arg(long = "by")]
        resolver: String,
    },

    /// List a member's strikes
    List { user: String },
}

#[derive(Subcommand)]
pub enum LeaveCmd {
    /// File a leave request
    Request {
        user: String,

        /// Leave type: sick, personal, academic
        #[arg(long = "type", default_value = "personal")]
        leave_type: String,

        #[arg(long = "from")]
        from: String,

        #[arg(long = "to")]
        to: String,

        #[arg(long = "reason", default_value = "")]
        reason: String,
    },

    /// Approve a pending request (core team / teacher only)
    Approve {
        request_id: i32,

        #[arg(long = "by")]
        decider: String,
    },

    /// Reject a pending request (core team / teacher only)
    Reject {
        request_id: i32,

        #[arg(long = "by")]
        decider: String,

        #[arg(long = "reason")]
        reason: Option<String>,
    },

    /// List leave requests
    List {
        #[arg(long)]
        user: Option<String>,
    },
}
