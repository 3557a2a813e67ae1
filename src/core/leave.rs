//! Leave workflow: pending → approved/rejected, decided once.

use crate::db::{audit, leave, users};
use crate::errors::{AppError, AppResult};
use crate::models::leave_request::{LeaveRequest, LeaveStatus, LeaveType};
use crate::utils::time::format_datetime;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;

/// High-level business logic for the `leave` command.
pub struct LeaveLogic;

impl LeaveLogic {
    pub fn request(
        conn: &mut Connection,
        user_name: &str,
        request_type: LeaveType,
        from_date: NaiveDate,
        to_date: NaiveDate,
        reason: &str,
    ) -> AppResult<i64> {
        if to_date < from_date {
            return Err(AppError::InvalidDate(
                "leave end date before start date".into(),
            ));
        }

        let tx = conn.transaction()?;

        let user = users::require_by_name(&tx, user_name)?;
        let id = leave::insert_request(&tx, user.id, request_type, &from_date, &to_date, reason)?;

        audit::audit(
            &tx,
            "leave_requested",
            &user.name,
            &format!("{} → {}", from_date, to_date),
        )?;

        tx.commit()?;
        Ok(id)
    }

    /// Decide a pending request. Only core-team members and teachers may
    /// decide; a decided request cannot transition again.
    pub fn decide(
        conn: &mut Connection,
        request_id: i32,
        approve: bool,
        decider_name: &str,
        rejection_reason: Option<&str>,
        now: NaiveDateTime,
    ) -> AppResult<LeaveRequest> {
        let tx = conn.transaction()?;

        let decider = users::require_by_name(&tx, decider_name)?;
        if !decider.role.can_moderate() {
            return Err(AppError::NotAuthorized(decider.name));
        }

        let request = leave::get_request(&tx, request_id)?
            .ok_or(AppError::RequestNotFound(request_id))?;
        if request.status != LeaveStatus::Pending {
            return Err(AppError::AlreadyDecided(request_id));
        }

        let status = if approve {
            LeaveStatus::Approved
        } else {
            LeaveStatus::Rejected
        };
        let rejection = if approve { None } else { rejection_reason };

        leave::set_decision(
            &tx,
            request_id,
            status,
            decider.id,
            rejection,
            &format_datetime(now),
        )?;

        audit::audit(
            &tx,
            "leave_decided",
            &decider.name,
            &format!("request {} {}", request_id, status.to_db_str()),
        )?;

        tx.commit()?;

        Ok(LeaveRequest {
            status,
            decided_by: Some(decider.id),
            rejection_reason: rejection.map(|s| s.to_string()),
            decided_at: Some(format_datetime(now)),
            ..request
        })
    }
}
