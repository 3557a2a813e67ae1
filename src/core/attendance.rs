//! Attendance marking and approval. Marking is guarded by the
//! suspension gate; the (user, date) uniqueness is schema-enforced.

use crate::core::session::check_not_suspended;
use crate::db::{attendance, audit, users};
use crate::errors::{AppError, AppResult};
use crate::models::attendance_record::{AttendanceRecord, AttendanceStatus};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;

/// High-level business logic for the `mark` and `approve` commands.
pub struct AttendanceLogic;

impl AttendanceLogic {
    pub fn mark(
        conn: &mut Connection,
        user_name: &str,
        date: NaiveDate,
        status: AttendanceStatus,
        now: NaiveDateTime,
    ) -> AppResult<i64> {
        let tx = conn.transaction()?;

        let user = users::require_by_name(&tx, user_name)?;
        check_not_suspended(&user, now)?;

        let id = attendance::insert_record(&tx, user.id, &date, status).map_err(|e| {
            if AppError::is_unique_violation(&e) {
                AppError::DuplicateAttendance {
                    user: user.name.clone(),
                    date: date.format("%Y-%m-%d").to_string(),
                }
            } else {
                AppError::Db(e)
            }
        })?;

        audit::audit(
            &tx,
            "attendance_marked",
            &user.name,
            &format!("{} {}", date, status.to_db_str()),
        )?;

        tx.commit()?;
        Ok(id)
    }

    pub fn approve(
        conn: &mut Connection,
        record_id: i32,
        approver_name: &str,
    ) -> AppResult<AttendanceRecord> {
        let tx = conn.transaction()?;

        let approver = users::require_by_name(&tx, approver_name)?;
        if !approver.role.can_moderate() {
            return Err(AppError::NotAuthorized(approver.name));
        }

        let record = attendance::get_record(&tx, record_id)?
            .ok_or(AppError::RecordNotFound(record_id))?;

        attendance::set_approved(&tx, record_id, approver.id)?;

        audit::audit(
            &tx,
            "attendance_approved",
            &approver.name,
            &format!("record {}", record_id),
        )?;

        tx.commit()?;

        Ok(AttendanceRecord {
            is_approved: true,
            approved_by: Some(approver.id),
            ..record
        })
    }
}
