//! Strike ledger and suspension policy.
//!
//! `evaluate_suspension` is the single authority coupling a user's
//! suspension window to their active-strike count. Both the issue and the
//! resolve path call it inside their transaction, so the derived state
//! (users.strike_count, users.suspended_until) cannot drift from the
//! strike table.

use crate::config::Config;
use crate::db::{audit, strikes, users};
use crate::errors::{AppError, AppResult};
use crate::models::strike::{Severity, Strike, StrikeReason};
use crate::models::user::User;
use crate::utils::time::format_datetime;
use chrono::{Duration, NaiveDateTime};
use rusqlite::Connection;

/// Transaction-internal strike issuance. Callers that already hold a
/// transaction (session end sweep) use this directly; the public
/// `record_strike` wraps it.
pub fn issue_strike(
    tx: &Connection,
    cfg: &Config,
    user: &User,
    reason: StrikeReason,
    severity: Severity,
    detail: &str,
    now: NaiveDateTime,
) -> AppResult<i64> {
    let active_before = strikes::count_active(tx, user.id)?;

    let id = strikes::insert_strike(
        tx,
        user.id,
        reason,
        severity,
        detail,
        (active_before + 1) as i32,
        &format_datetime(now),
    )?;

    evaluate_suspension(tx, cfg, user.id, now)?;

    audit::audit(
        tx,
        "strike_issued",
        &user.name,
        &format!("{} ({})", reason.label(), detail),
    )?;

    Ok(id)
}

/// Recompute the derived suspension state from the active-strike count.
/// At or above the threshold the user is suspended for the configured
/// window; below it any pending suspension is cleared.
pub fn evaluate_suspension(
    tx: &Connection,
    cfg: &Config,
    user_id: i32,
    now: NaiveDateTime,
) -> AppResult<i64> {
    let active = strikes::count_active(tx, user_id)?;

    users::set_strike_count(tx, user_id, active as i32)?;

    if active >= cfg.strike_threshold {
        let until = now + Duration::days(cfg.suspension_days);
        users::set_suspended_until(tx, user_id, Some(&format_datetime(until)))?;
    } else {
        users::set_suspended_until(tx, user_id, None)?;
    }

    Ok(active)
}

/// High-level business logic for the `strike` command.
pub struct StrikeLogic;

impl StrikeLogic {
    pub fn issue(
        conn: &mut Connection,
        cfg: &Config,
        user_name: &str,
        reason: StrikeReason,
        severity: Severity,
        detail: &str,
        now: NaiveDateTime,
    ) -> AppResult<i64> {
        let tx = conn.transaction()?;

        let user = users::require_by_name(&tx, user_name)?;
        let id = issue_strike(&tx, cfg, &user, reason, severity, detail, now)?;

        tx.commit()?;
        Ok(id)
    }

    /// Resolve a strike. Only core-team members and teachers may resolve;
    /// resolving re-runs the suspension evaluation, so clearing the last
    /// threshold-crossing strike lifts the suspension.
    pub fn resolve(
        conn: &mut Connection,
        cfg: &Config,
        strike_id: i32,
        resolver_name: &str,
        now: NaiveDateTime,
    ) -> AppResult<Strike> {
        let tx = conn.transaction()?;

        let resolver = users::require_by_name(&tx, resolver_name)?;
        if !resolver.role.can_moderate() {
            return Err(AppError::NotAuthorized(resolver.name));
        }

        let strike = strikes::get_strike(&tx, strike_id)?
            .ok_or(AppError::StrikeNotFound(strike_id))?;
        if !strike.is_active {
            return Err(AppError::AlreadyResolved(strike_id));
        }

        strikes::mark_resolved(&tx, strike_id, resolver.id, &format_datetime(now))?;
        evaluate_suspension(&tx, cfg, strike.user_id, now)?;

        audit::audit(
            &tx,
            "strike_resolved",
            &resolver.name,
            &format!("strike {} for user {}", strike_id, strike.user_id),
        )?;

        tx.commit()?;

        Ok(Strike {
            is_active: false,
            resolved_by: Some(resolver.id),
            resolved_at: Some(format_datetime(now)),
            ..strike
        })
    }
}
