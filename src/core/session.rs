//! Duty-session state machine: none → active → ended.
//!
//! All transitions run inside one transaction. The one-active-session
//! invariant lives in the schema (partial unique index), so concurrent
//! start attempts cannot both commit; this module just maps the
//! constraint violation to a conflict error.

use crate::config::Config;
use crate::db::{attendance, audit, hourly_logs, sessions, users};
use crate::errors::{AppError, AppResult};
use crate::models::attendance_record::AttendanceStatus;
use crate::models::duty_session::DutySession;
use crate::models::strike::{Severity, StrikeReason};
use crate::models::user::User;
use crate::utils::time::format_minutes;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;

/// Outcome of ending a session, for display and tests.
pub struct SessionClose {
    pub session: DutySession,
    pub violations: Vec<StrikeReason>,
}

/// High-level business logic for the `duty` command.
pub struct SessionLogic;

impl SessionLogic {
    /// Start a duty session. Preconditions: user exists, not suspended,
    /// no active session. Also records an `on_club_duty` attendance row
    /// for the date if the day has none yet.
    pub fn start(
        conn: &mut Connection,
        user_name: &str,
        date: NaiveDate,
        start_time: NaiveDateTime,
        now: NaiveDateTime,
    ) -> AppResult<i64> {
        let tx = conn.transaction()?;

        let user = users::require_by_name(&tx, user_name)?;
        check_not_suspended(&user, now)?;

        let session_id = sessions::insert_active_session(&tx, user.id, &date, start_time)
            .map_err(|e| {
                if AppError::is_unique_violation(&e) {
                    AppError::ActiveSessionExists(user.name.clone())
                } else {
                    AppError::Db(e)
                }
            })?;

        if attendance::find_record(&tx, user.id, &date)?.is_none() {
            attendance::insert_record(&tx, user.id, &date, AttendanceStatus::OnClubDuty)?;
        }

        audit::audit(
            &tx,
            "duty_started",
            &user.name,
            &format!("session {} on {}", session_id, date),
        )?;

        tx.commit()?;
        Ok(session_id)
    }

    /// End the user's active session. Computes
    /// `total = max(0, elapsed − break)`, derives eligibility against the
    /// configured threshold, then sweeps the session for violations
    /// (missed hourly logs, insufficient hours, excessive break) in the
    /// same transaction.
    pub fn end(
        conn: &mut Connection,
        cfg: &Config,
        user_name: &str,
        end_time: NaiveDateTime,
        break_minutes: i64,
        now: NaiveDateTime,
    ) -> AppResult<SessionClose> {
        if break_minutes < 0 {
            return Err(AppError::InvalidTime(
                "break minutes cannot be negative".into(),
            ));
        }

        let tx = conn.transaction()?;

        let user = users::require_by_name(&tx, user_name)?;
        let session = sessions::active_session_for_user(&tx, user.id)?
            .ok_or_else(|| AppError::NoActiveSession(user.name.clone()))?;

        if end_time <= session.start_time {
            return Err(AppError::InvalidTime(
                "end must be later than session start".into(),
            ));
        }

        let elapsed = (end_time - session.start_time).num_minutes();
        let total = DutySession::net_minutes(elapsed, break_minutes);
        let eligible = total >= cfg.duty_min_minutes;

        sessions::close_session(&tx, session.id, end_time, break_minutes, total, eligible)?;
        attendance::set_duty_eligible(&tx, user.id, &session.date, eligible)?;

        let violations =
            sweep_violations(&tx, cfg, &user, &session, now, elapsed, break_minutes, total)?;

        audit::audit(
            &tx,
            "duty_ended",
            &user.name,
            &format!(
                "session {} total {} eligible {}",
                session.id,
                format_minutes(total),
                eligible
            ),
        )?;

        tx.commit()?;

        Ok(SessionClose {
            session: DutySession {
                end_time: Some(end_time),
                break_minutes,
                total_minutes: Some(total),
                is_active: false,
                duty_eligible: eligible,
                ..session
            },
            violations,
        })
    }

    pub fn active(conn: &Connection, user_name: &str) -> AppResult<Option<DutySession>> {
        let user = users::require_by_name(conn, user_name)?;
        sessions::active_session_for_user(conn, user.id)
    }
}

/// Suspension gate shared with attendance marking.
pub fn check_not_suspended(user: &User, now: NaiveDateTime) -> AppResult<()> {
    if user.is_suspended(now) {
        let until = user
            .suspended_until
            .map(|u| u.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        return Err(AppError::UserSuspended {
            user: user.name.clone(),
            until,
        });
    }
    Ok(())
}

/// Hour indexes that should carry a check-in for a session of `elapsed`
/// minutes: one per full hour worked.
pub fn expected_hours(elapsed: i64) -> Vec<i64> {
    (0..elapsed / 60).collect()
}

/// Post-close rule evaluation. Each finding issues one strike through the
/// shared transaction, stamped with the close time (`now`).
#[allow(clippy::too_many_arguments)]
fn sweep_violations(
    tx: &Connection,
    cfg: &Config,
    user: &User,
    session: &DutySession,
    now: NaiveDateTime,
    elapsed: i64,
    break_minutes: i64,
    total: i64,
) -> AppResult<Vec<StrikeReason>> {
    let mut found = Vec::new();

    // Missed hourly logs
    let logged = hourly_logs::logged_hours(tx, session.id)?;
    for hour in expected_hours(elapsed) {
        if !logged.contains(&hour) {
            crate::core::strikes::issue_strike(
                tx,
                cfg,
                user,
                StrikeReason::MissedHourlyLog,
                Severity::Minor,
                &format!("session {} hour {}", session.id, hour + 1),
                now,
            )?;
            found.push(StrikeReason::MissedHourlyLog);
        }
    }

    // Insufficient duty hours
    if total < cfg.duty_min_minutes && total >= cfg.short_session_grace_minutes {
        crate::core::strikes::issue_strike(
            tx,
            cfg,
            user,
            StrikeReason::InsufficientDutyHours,
            Severity::Minor,
            &format!("session {} net {} min", session.id, total),
            now,
        )?;
        found.push(StrikeReason::InsufficientDutyHours);
    }

    // Excessive break
    if break_minutes > cfg.max_break_minutes {
        crate::core::strikes::issue_strike(
            tx,
            cfg,
            user,
            StrikeReason::ExcessiveBreak,
            Severity::Minor,
            &format!("session {} break {} min", session.id, break_minutes),
            now,
        )?;
        found.push(StrikeReason::ExcessiveBreak);
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_hours_counts_full_hours_only() {
        assert!(expected_hours(59).is_empty());
        assert_eq!(expected_hours(60), vec![0]);
        assert_eq!(expected_hours(150), vec![0, 1]);
    }
}
