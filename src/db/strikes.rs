use crate::errors::{AppError, AppResult};
use crate::models::strike::{Severity, Strike, StrikeReason};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Strike> {
    let reason_str: String = row.get("reason")?;
    let reason = StrikeReason::from_db_str(&reason_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidReason(reason_str.clone())),
        )
    })?;

    let severity_str: String = row.get("severity")?;
    let severity = Severity::from_db_str(&severity_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidSeverity(severity_str.clone())),
        )
    })?;

    Ok(Strike {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        reason,
        severity,
        detail: row.get("detail")?,
        strike_number: row.get("strike_number")?,
        is_active: row.get::<_, i32>("is_active")? == 1,
        issued_at: row.get("issued_at")?,
        resolved_by: row.get("resolved_by")?,
        resolved_at: row.get("resolved_at")?,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn insert_strike(
    conn: &Connection,
    user_id: i32,
    reason: StrikeReason,
    severity: Severity,
    detail: &str,
    strike_number: i32,
    issued_at: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO strikes
             (user_id, reason, severity, detail, strike_number, is_active, issued_at)
         VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
        params![
            user_id,
            reason.to_db_str(),
            severity.to_db_str(),
            detail,
            strike_number,
            issued_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_strike(conn: &Connection, id: i32) -> AppResult<Option<Strike>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM strikes WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn list_for_user(conn: &Connection, user_id: i32) -> AppResult<Vec<Strike>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM strikes WHERE user_id = ?1 ORDER BY issued_at ASC",
    )?;
    let rows = stmt.query_map([user_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_active(conn: &Connection, user_id: i32) -> AppResult<i64> {
    let mut stmt = conn
        .prepare_cached("SELECT COUNT(*) FROM strikes WHERE user_id = ?1 AND is_active = 1")?;
    let n: i64 = stmt.query_row([user_id], |r| r.get(0))?;
    Ok(n)
}

pub fn mark_resolved(
    conn: &Connection,
    strike_id: i32,
    resolver_id: i32,
    resolved_at: &str,
) -> AppResult<()> {
    conn.execute(
        "UPDATE strikes SET is_active = 0, resolved_by = ?1, resolved_at = ?2 WHERE id = ?3",
        params![resolver_id, resolved_at, strike_id],
    )?;
    Ok(())
}
