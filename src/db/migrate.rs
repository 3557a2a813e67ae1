use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists. It doubles as the audit trail and
/// the applied-migration ledger.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check whether a migration was already recorded in the ledger.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the membership and attendance tables (modern schema).
fn create_core_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL UNIQUE,
            role            TEXT NOT NULL CHECK(role IN ('student','core_team','teacher')),
            strike_count    INTEGER NOT NULL DEFAULT 0,
            suspended_until TEXT,
            created_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS attendance (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id       INTEGER NOT NULL REFERENCES users(id),
            date          TEXT NOT NULL,
            status        TEXT NOT NULL CHECK(status IN ('present','on_club_duty','absent')),
            is_approved   INTEGER NOT NULL DEFAULT 0,
            approved_by   INTEGER,
            duty_eligible INTEGER NOT NULL DEFAULT 0,
            created_at    TEXT NOT NULL,
            UNIQUE(user_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date);
        "#,
    )?;
    Ok(())
}

/// Create the duty-session tables. The partial unique index is the
/// authority for the one-active-session-per-user invariant: of two
/// racing session starts at most one insert can commit.
fn create_duty_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS duty_sessions (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id       INTEGER NOT NULL REFERENCES users(id),
            date          TEXT NOT NULL,
            start_time    TEXT NOT NULL,
            end_time      TEXT,
            break_minutes INTEGER NOT NULL DEFAULT 0,
            total_minutes INTEGER,
            is_active     INTEGER NOT NULL DEFAULT 1,
            duty_eligible INTEGER NOT NULL DEFAULT 0,
            created_at    TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS ux_duty_sessions_active
            ON duty_sessions(user_id) WHERE is_active = 1;
        CREATE INDEX IF NOT EXISTS idx_duty_sessions_user_date
            ON duty_sessions(user_id, date);

        CREATE TABLE IF NOT EXISTS hourly_logs (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id         INTEGER NOT NULL REFERENCES duty_sessions(id),
            log_time           TEXT NOT NULL,
            hour_index         INTEGER NOT NULL,
            previous_hour_work TEXT NOT NULL DEFAULT '',
            next_hour_plan     TEXT NOT NULL DEFAULT '',
            is_break           INTEGER NOT NULL DEFAULT 0,
            created_at         TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS ux_hourly_logs_hour
            ON hourly_logs(session_id, hour_index) WHERE is_break = 0;
        "#,
    )?;
    Ok(())
}

fn create_discipline_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS strikes (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id       INTEGER NOT NULL REFERENCES users(id),
            reason        TEXT NOT NULL CHECK(reason IN
                ('missed_hourly_log','insufficient_duty_hours','excessive_break','manual')),
            severity      TEXT NOT NULL DEFAULT 'minor' CHECK(severity IN ('minor','major')),
            detail        TEXT NOT NULL DEFAULT '',
            strike_number INTEGER NOT NULL DEFAULT 0,
            is_active     INTEGER NOT NULL DEFAULT 1,
            issued_at     TEXT NOT NULL,
            resolved_by   INTEGER,
            resolved_at   TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_strikes_user_active ON strikes(user_id, is_active);

        CREATE TABLE IF NOT EXISTS leave_requests (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id          INTEGER NOT NULL REFERENCES users(id),
            request_type     TEXT NOT NULL CHECK(request_type IN ('sick','personal','academic')),
            from_date        TEXT NOT NULL,
            to_date          TEXT NOT NULL,
            reason           TEXT NOT NULL DEFAULT '',
            status           TEXT NOT NULL DEFAULT 'pending'
                             CHECK(status IN ('pending','approved','rejected')),
            decided_by       INTEGER,
            rejection_reason TEXT,
            created_at       TEXT NOT NULL,
            decided_at       TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Early schemas stored strikes without a free-text detail column.
fn migrate_add_strike_detail(conn: &Connection) -> Result<(), Error> {
    let version = "20250412_0003_add_strike_detail";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    // Fresh databases already carry the column; only mark the version.
    let mut stmt = conn.prepare("PRAGMA table_info('strikes')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    let mut has_detail = false;
    for c in cols {
        if c? == "detail" {
            has_detail = true;
            break;
        }
    }

    if !has_detail {
        conn.execute(
            "ALTER TABLE strikes ADD COLUMN detail TEXT NOT NULL DEFAULT '';",
            [],
        )?;
        success(format!(
            "Migration applied: {} → added 'detail' to strikes table",
            version
        ));
    }

    mark_migration(conn, version, "Added detail column to strikes")?;

    Ok(())
}

/// Early schemas kept one unique (session_id, hour_index) slot for all
/// rows, so a break marker blocked the hour's real check-in. Rebuild the
/// table with the uniqueness scoped to non-break rows.
fn migrate_hourly_log_break_slots(conn: &Connection) -> Result<()> {
    let version = "20250825_0004_hourly_break_slots";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let sql: Option<String> = conn
        .query_row(
            "SELECT sql FROM sqlite_master WHERE type='table' AND name='hourly_logs'",
            [],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(sql) = sql
        && sql.contains("UNIQUE(session_id, hour_index)")
    {
        conn.execute_batch(
            r#"
            ALTER TABLE hourly_logs RENAME TO hourly_logs_old;

            CREATE TABLE hourly_logs (
                id                 INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id         INTEGER NOT NULL REFERENCES duty_sessions(id),
                log_time           TEXT NOT NULL,
                hour_index         INTEGER NOT NULL,
                previous_hour_work TEXT NOT NULL DEFAULT '',
                next_hour_plan     TEXT NOT NULL DEFAULT '',
                is_break           INTEGER NOT NULL DEFAULT 0,
                created_at         TEXT NOT NULL
            );

            INSERT INTO hourly_logs SELECT * FROM hourly_logs_old;
            DROP TABLE hourly_logs_old;
            "#,
        )?;
        success(format!(
            "Migration applied: {} → hourly-log uniqueness scoped to non-break rows",
            version
        ));
    }

    // Idempotent, also covers fresh schemas.
    conn.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS ux_hourly_logs_hour
             ON hourly_logs(session_id, hour_index) WHERE is_break = 0;",
    )?;

    mark_migration(conn, version, "Scoped hourly-log uniqueness to non-break rows")?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from the `init` and `db --migrate` commands.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table (audit + migration ledger)
    ensure_log_table(conn)?;

    // 2) Base schema
    let fresh = !table_exists(conn, "users")?;
    create_core_tables(conn)?;
    create_duty_tables(conn)?;
    create_discipline_tables(conn)?;

    if fresh {
        success("Created clubduty schema (modern).");
    }

    // 3) Versioned migrations
    migrate_add_strike_detail(conn)?;
    migrate_hourly_log_break_slots(conn)?;

    Ok(())
}
