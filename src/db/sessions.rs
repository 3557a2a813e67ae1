use crate::db::build_filtered_query;
use crate::errors::{AppError, AppResult};
use crate::models::duty_session::DutySession;
use crate::utils::time::{format_datetime, parse_datetime};
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params};

fn parse_ts(raw: String) -> Result<NaiveDateTime> {
    parse_datetime(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(raw)),
        )
    })
}

pub fn map_row(row: &Row) -> Result<DutySession> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start_time = parse_ts(row.get::<_, String>("start_time")?)?;
    let end_time = match row.get::<_, Option<String>>("end_time")? {
        Some(raw) => Some(parse_ts(raw)?),
        None => None,
    };

    Ok(DutySession {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        start_time,
        end_time,
        break_minutes: row.get("break_minutes")?,
        total_minutes: row.get("total_minutes")?,
        is_active: row.get::<_, i32>("is_active")? == 1,
        duty_eligible: row.get::<_, i32>("duty_eligible")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// Raw insert of an active session. The partial unique index
/// `ux_duty_sessions_active` rejects a second active row per user; the
/// rusqlite error is returned untouched so the caller can map it.
pub fn insert_active_session(
    conn: &Connection,
    user_id: i32,
    date: &NaiveDate,
    start_time: NaiveDateTime,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO duty_sessions
             (user_id, date, start_time, break_minutes, is_active, duty_eligible, created_at)
         VALUES (?1, ?2, ?3, 0, 1, 0, ?4)",
        params![
            user_id,
            date.format("%Y-%m-%d").to_string(),
            format_datetime(start_time),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn active_session_for_user(conn: &Connection, user_id: i32) -> AppResult<Option<DutySession>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM duty_sessions WHERE user_id = ?1 AND is_active = 1",
    )?;
    Ok(stmt.query_row([user_id], map_row).optional()?)
}

/// Close a session: record end time, break, net total and eligibility,
/// and drop it out of the active-index partition.
pub fn close_session(
    conn: &Connection,
    id: i32,
    end_time: NaiveDateTime,
    break_minutes: i64,
    total_minutes: i64,
    duty_eligible: bool,
) -> AppResult<()> {
    conn.execute(
        "UPDATE duty_sessions
         SET end_time = ?1, break_minutes = ?2, total_minutes = ?3,
             duty_eligible = ?4, is_active = 0
         WHERE id = ?5",
        params![
            format_datetime(end_time),
            break_minutes,
            total_minutes,
            if duty_eligible { 1 } else { 0 },
            id,
        ],
    )?;
    Ok(())
}

pub fn list_filtered(
    conn: &Connection,
    period: Option<&str>,
    user_id: Option<i32>,
) -> AppResult<Vec<DutySession>> {
    let base_query = "SELECT * FROM duty_sessions";
    let (mut query, params) = build_filtered_query(base_query, period, user_id)?;

    query.push_str(" ORDER BY date ASC, start_time ASC");

    let mut stmt = conn.prepare_cached(&query)?;
    let param_refs: Vec<&dyn ToSql> = params.iter().map(|s| s as &dyn ToSql).collect();
    let rows = stmt.query_map(param_refs.as_slice(), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
