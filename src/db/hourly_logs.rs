use crate::errors::{AppError, AppResult};
use crate::models::hourly_log::HourlyLog;
use crate::utils::time::{format_datetime, parse_datetime};
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<HourlyLog> {
    let raw: String = row.get("log_time")?;
    let log_time = parse_datetime(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(raw)),
        )
    })?;

    Ok(HourlyLog {
        id: row.get("id")?,
        session_id: row.get("session_id")?,
        log_time,
        hour_index: row.get("hour_index")?,
        previous_hour_work: row.get("previous_hour_work")?,
        next_hour_plan: row.get("next_hour_plan")?,
        is_break: row.get::<_, i32>("is_break")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// Raw insert. The partial unique index `ux_hourly_logs_hour` rejects a
/// second non-break check-in for the same hour (break markers coexist
/// freely); the error is left for the caller to map.
#[allow(clippy::too_many_arguments)]
pub fn insert_log(
    conn: &Connection,
    session_id: i32,
    log_time: NaiveDateTime,
    hour_index: i64,
    previous_hour_work: &str,
    next_hour_plan: &str,
    is_break: bool,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO hourly_logs
             (session_id, log_time, hour_index, previous_hour_work, next_hour_plan,
              is_break, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            session_id,
            format_datetime(log_time),
            hour_index,
            previous_hour_work,
            next_hour_plan,
            if is_break { 1 } else { 0 },
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_for_session(conn: &Connection, session_id: i32) -> AppResult<Vec<HourlyLog>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM hourly_logs WHERE session_id = ?1 ORDER BY hour_index ASC",
    )?;
    let rows = stmt.query_map([session_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Hour indexes that received a non-break check-in.
pub fn logged_hours(conn: &Connection, session_id: i32) -> AppResult<Vec<i64>> {
    let mut stmt = conn.prepare_cached(
        "SELECT hour_index FROM hourly_logs
         WHERE session_id = ?1 AND is_break = 0
         ORDER BY hour_index ASC",
    )?;
    let rows = stmt.query_map([session_id], |row| row.get::<_, i64>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
