use crate::errors::{AppError, AppResult};
use crate::models::leave_request::{LeaveRequest, LeaveStatus, LeaveType};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn parse_day(raw: String) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw)),
        )
    })
}

pub fn map_row(row: &Row) -> Result<LeaveRequest> {
    let type_str: String = row.get("request_type")?;
    let request_type = LeaveType::from_db_str(&type_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidLeaveType(type_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = LeaveStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(LeaveRequest {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        request_type,
        from_date: parse_day(row.get::<_, String>("from_date")?)?,
        to_date: parse_day(row.get::<_, String>("to_date")?)?,
        reason: row.get("reason")?,
        status,
        decided_by: row.get("decided_by")?,
        rejection_reason: row.get("rejection_reason")?,
        created_at: row.get("created_at")?,
        decided_at: row.get("decided_at")?,
    })
}

pub fn insert_request(
    conn: &Connection,
    user_id: i32,
    request_type: LeaveType,
    from_date: &NaiveDate,
    to_date: &NaiveDate,
    reason: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO leave_requests
             (user_id, request_type, from_date, to_date, reason, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, 'pending', ?6)",
        params![
            user_id,
            request_type.to_db_str(),
            from_date.format("%Y-%m-%d").to_string(),
            to_date.format("%Y-%m-%d").to_string(),
            reason,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_request(conn: &Connection, id: i32) -> AppResult<Option<LeaveRequest>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM leave_requests WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn list_requests(conn: &Connection, user_id: Option<i32>) -> AppResult<Vec<LeaveRequest>> {
    let mut out = Vec::new();

    if let Some(uid) = user_id {
        let mut stmt = conn.prepare_cached(
            "SELECT * FROM leave_requests WHERE user_id = ?1 ORDER BY created_at ASC",
        )?;
        let rows = stmt.query_map([uid], map_row)?;
        for r in rows {
            out.push(r?);
        }
    } else {
        let mut stmt =
            conn.prepare_cached("SELECT * FROM leave_requests ORDER BY created_at ASC")?;
        let rows = stmt.query_map([], map_row)?;
        for r in rows {
            out.push(r?);
        }
    }

    Ok(out)
}

pub fn set_decision(
    conn: &Connection,
    request_id: i32,
    status: LeaveStatus,
    decider_id: i32,
    rejection_reason: Option<&str>,
    decided_at: &str,
) -> AppResult<()> {
    conn.execute(
        "UPDATE leave_requests
         SET status = ?1, decided_by = ?2, rejection_reason = ?3, decided_at = ?4
         WHERE id = ?5",
        params![
            status.to_db_str(),
            decider_id,
            rejection_reason,
            decided_at,
            request_id,
        ],
    )?;
    Ok(())
}
