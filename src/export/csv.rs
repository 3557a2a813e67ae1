use crate::models::attendance_record::AttendanceRecord;
use crate::models::member_summary::MemberSummary;
use csv::Writer;

/// Write club summary rows to CSV.
pub fn write_summary_csv(path: &str, rows: &[MemberSummary]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "name",
        "role",
        "days_present",
        "days_on_duty",
        "days_absent",
        "sessions_total",
        "sessions_eligible",
        "duty_minutes",
        "active_strikes",
        "suspended",
    ])?;

    for row in rows {
        wtr.write_record(&[
            row.name.clone(),
            row.role.clone(),
            row.days_present.to_string(),
            row.days_on_duty.to_string(),
            row.days_absent.to_string(),
            row.sessions_total.to_string(),
            row.sessions_eligible.to_string(),
            row.duty_minutes.to_string(),
            row.active_strikes.to_string(),
            row.suspended.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write raw attendance records to CSV.
pub fn write_attendance_csv(path: &str, records: &[AttendanceRecord]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["user_id", "date", "status", "approved", "duty_eligible"])?;

    for r in records {
        wtr.write_record(&[
            r.user_id.to_string(),
            r.date_str(),
            r.status.to_db_str().to_string(),
            r.is_approved.to_string(),
            r.duty_eligible.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
