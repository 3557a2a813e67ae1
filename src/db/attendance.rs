use crate::db::build_filtered_query;
use crate::errors::{AppError, AppResult};
use crate::models::attendance_record::{AttendanceRecord, AttendanceStatus};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params};

pub fn map_row(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = AttendanceStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(AttendanceRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        status,
        is_approved: row.get::<_, i32>("is_approved")? == 1,
        approved_by: row.get("approved_by")?,
        duty_eligible: row.get::<_, i32>("duty_eligible")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// Raw insert. Returns the underlying rusqlite error untouched so the
/// caller can map the (user_id, date) UNIQUE violation to a conflict.
pub fn insert_record(
    conn: &Connection,
    user_id: i32,
    date: &NaiveDate,
    status: AttendanceStatus,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO attendance (user_id, date, status, is_approved, duty_eligible, created_at)
         VALUES (?1, ?2, ?3, 0, 0, ?4)",
        params![
            user_id,
            date.format("%Y-%m-%d").to_string(),
            status.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_record(conn: &Connection, id: i32) -> AppResult<Option<AttendanceRecord>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM attendance WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn find_record(
    conn: &Connection,
    user_id: i32,
    date: &NaiveDate,
) -> AppResult<Option<AttendanceRecord>> {
    let mut stmt =
        conn.prepare_cached("SELECT * FROM attendance WHERE user_id = ?1 AND date = ?2")?;
    Ok(stmt
        .query_row(
            params![user_id, date.format("%Y-%m-%d").to_string()],
            map_row,
        )
        .optional()?)
}

pub fn list_filtered(
    conn: &Connection,
    period: Option<&str>,
    user_id: Option<i32>,
) -> AppResult<Vec<AttendanceRecord>> {
    let base_query = "SELECT * FROM attendance";
    let (mut query, params) = build_filtered_query(base_query, period, user_id)?;

    query.push_str(" ORDER BY date ASC, user_id ASC");

    let mut stmt = conn.prepare_cached(&query)?;
    let param_refs: Vec<&dyn ToSql> = params.iter().map(|s| s as &dyn ToSql).collect();
    let rows = stmt.query_map(param_refs.as_slice(), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_approved(conn: &Connection, record_id: i32, approver_id: i32) -> AppResult<()> {
    conn.execute(
        "UPDATE attendance SET is_approved = 1, approved_by = ?1 WHERE id = ?2",
        params![approver_id, record_id],
    )?;
    Ok(())
}

/// Mark the day's attendance row duty-eligible once a qualifying session
/// closes. No-op when the day has no row.
pub fn set_duty_eligible(
    conn: &Connection,
    user_id: i32,
    date: &NaiveDate,
    eligible: bool,
) -> AppResult<()> {
    conn.execute(
        "UPDATE attendance SET duty_eligible = ?1 WHERE user_id = ?2 AND date = ?3",
        params![
            if eligible { 1 } else { 0 },
            user_id,
            date.format("%Y-%m-%d").to_string()
        ],
    )?;
    Ok(())
}
