//! Hourly log collector: periodic check-ins during an active session.

use crate::config::Config;
use crate::db::{audit, hourly_logs, sessions, users};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// High-level business logic for the `checkin` command.
pub struct CheckinLogic;

impl CheckinLogic {
    /// Record a check-in against the user's active session. The hour
    /// index is the number of full hours elapsed since session start; a
    /// check-in landing within the grace window after an hour boundary
    /// backfills the previous hour when that one is still open.
    pub fn record(
        conn: &mut Connection,
        cfg: &Config,
        user_name: &str,
        log_time: NaiveDateTime,
        previous_hour_work: &str,
        next_hour_plan: &str,
        is_break: bool,
    ) -> AppResult<i64> {
        let tx = conn.transaction()?;

        let user = users::require_by_name(&tx, user_name)?;
        let session = sessions::active_session_for_user(&tx, user.id)?
            .ok_or_else(|| AppError::NoActiveSession(user.name.clone()))?;

        let minutes = (log_time - session.start_time).num_minutes();
        if minutes < 0 {
            return Err(AppError::InvalidTime(
                "check-in before session start".into(),
            ));
        }

        let mut hour_index = minutes / 60;
        if !is_break && hour_index > 0 && minutes % 60 <= cfg.checkin_grace_minutes {
            let logged = hourly_logs::logged_hours(&tx, session.id)?;
            if !logged.contains(&(hour_index - 1)) {
                hour_index -= 1;
            }
        }

        let id = hourly_logs::insert_log(
            &tx,
            session.id,
            log_time,
            hour_index,
            previous_hour_work,
            next_hour_plan,
            is_break,
        )
        .map_err(|e| {
            if AppError::is_unique_violation(&e) {
                AppError::DuplicateCheckin(hour_index)
            } else {
                AppError::Db(e)
            }
        })?;

        audit::audit(
            &tx,
            "checkin",
            &user.name,
            &format!("session {} hour {}", session.id, hour_index),
        )?;

        tx.commit()?;
        Ok(id)
    }
}
