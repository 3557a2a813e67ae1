use crate::errors::{AppError, AppResult};
use crate::models::user::{Role, User};
use crate::utils::time::parse_datetime;
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<User> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    let suspended_raw: Option<String> = row.get("suspended_until")?;
    let suspended_until: Option<NaiveDateTime> = match suspended_raw {
        Some(s) => Some(parse_datetime(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(s.clone())),
            )
        })?),
        None => None,
    };

    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
        role,
        strike_count: row.get("strike_count")?,
        suspended_until,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_user(conn: &Connection, name: &str, role: Role) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (name, role, strike_count, created_at)
         VALUES (?1, ?2, 0, ?3)",
        params![name, role.to_db_str(), Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_name(conn: &Connection, name: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, role, strike_count, suspended_until, created_at
         FROM users WHERE name = ?1",
    )?;
    Ok(stmt.query_row([name], map_row).optional()?)
}

/// Look a user up by name, failing with `UserNotFound` when absent.
pub fn require_by_name(conn: &Connection, name: &str) -> AppResult<User> {
    find_by_name(conn, name)?.ok_or_else(|| AppError::UserNotFound(name.to_string()))
}

pub fn list_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, role, strike_count, suspended_until, created_at
         FROM users ORDER BY name ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_strike_count(conn: &Connection, user_id: i32, count: i32) -> AppResult<()> {
    conn.execute(
        "UPDATE users SET strike_count = ?1 WHERE id = ?2",
        params![count, user_id],
    )?;
    Ok(())
}

/// Single write path for the derived suspension state; callers go through
/// core::strikes::evaluate_suspension.
pub fn set_suspended_until(
    conn: &Connection,
    user_id: i32,
    until: Option<&str>,
) -> AppResult<()> {
    conn.execute(
        "UPDATE users SET suspended_until = ?1 WHERE id = ?2",
        params![until, user_id],
    )?;
    Ok(())
}
