use crate::errors::{AppError, AppResult};
use crate::models::attendance_record::AttendanceRecord;
use crate::models::member_summary::MemberSummary;

/// Write club summary rows as pretty-printed JSON.
pub fn write_summary_json(path: &str, rows: &[MemberSummary]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Write raw attendance records as pretty-printed JSON.
pub fn write_attendance_json(path: &str, records: &[AttendanceRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
