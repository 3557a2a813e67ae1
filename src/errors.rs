//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid attendance status: {0}")]
    InvalidStatus(String),

    #[error("Invalid strike reason: {0}")]
    InvalidReason(String),

    #[error("Invalid strike severity: {0}")]
    InvalidSeverity(String),

    #[error("Invalid leave type: {0}")]
    InvalidLeaveType(String),

    // ---------------------------
    // Not found
    // ---------------------------
    #[error("Unknown user: {0}")]
    UserNotFound(String),

    #[error("No active duty session for {0}")]
    NoActiveSession(String),

    #[error("Strike {0} not found")]
    StrikeNotFound(i32),

    #[error("Leave request {0} not found")]
    RequestNotFound(i32),

    #[error("Attendance record {0} not found")]
    RecordNotFound(i32),

    // ---------------------------
    // State conflicts
    // ---------------------------
    #[error("{0} already has an active duty session")]
    ActiveSessionExists(String),

    #[error("Attendance already recorded for {user} on {date}")]
    DuplicateAttendance { user: String, date: String },

    #[error("Check-in for hour {0} already recorded")]
    DuplicateCheckin(i64),

    #[error("Strike {0} is already resolved")]
    AlreadyResolved(i32),

    #[error("Leave request {0} has already been decided")]
    AlreadyDecided(i32),

    // ---------------------------
    // Gate / authorization
    // ---------------------------
    #[error("{user} is suspended until {until}")]
    UserSuspended { user: String, until: String },

    #[error("{0} is not allowed to perform this action")]
    NotAuthorized(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// True when the underlying SQLite error is a UNIQUE-constraint
    /// violation. Used to turn schema-level conflicts (duplicate
    /// attendance day, second active session) into their domain errors.
    pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}
