use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::attendance;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{
    ExportFormat, ensure_writable, notify_export_success, write_attendance_csv,
    write_attendance_json, write_summary_csv, write_summary_json,
};
use std::path::Path;

/// Export either the club summary or raw attendance records.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        attendance: raw_attendance,
        force,
    } = cmd
    {
        ensure_writable(file, *force)?;

        let pool = DbPool::new(&cfg.database)?;
        let now = chrono::Local::now().naive_local();

        if *raw_attendance {
            let records = attendance::list_filtered(&pool.conn, range.as_deref(), None)?;
            match format {
                ExportFormat::Csv => write_attendance_csv(file, &records)?,
                ExportFormat::Json => write_attendance_json(file, &records)?,
            }
            notify_export_success("Attendance", Path::new(file));
        } else {
            let rows = ReportLogic::club_summary(&pool.conn, range.as_deref(), now)?;
            match format {
                ExportFormat::Csv => write_summary_csv(file, &rows)?,
                ExportFormat::Json => write_summary_json(file, &rows)?,
            }
            notify_export_success("Summary", Path::new(file));
        }
    }

    Ok(())
}
