//! Report building: per-member and club-wide summaries.

use crate::db::{attendance, sessions, strikes, users};
use crate::errors::AppResult;
use crate::models::attendance_record::AttendanceStatus;
use crate::models::member_summary::MemberSummary;
use crate::models::user::User;
use chrono::NaiveDateTime;
use rusqlite::Connection;

pub struct ReportLogic;

impl ReportLogic {
    pub fn member_summary(
        conn: &Connection,
        user: &User,
        period: Option<&str>,
        now: NaiveDateTime,
    ) -> AppResult<MemberSummary> {
        let records = attendance::list_filtered(conn, period, Some(user.id))?;

        let mut days_present = 0;
        let mut days_on_duty = 0;
        let mut days_absent = 0;
        for r in &records {
            match r.status {
                AttendanceStatus::Present => days_present += 1,
                AttendanceStatus::OnClubDuty => days_on_duty += 1,
                AttendanceStatus::Absent => days_absent += 1,
            }
        }

        let all_sessions = sessions::list_filtered(conn, period, Some(user.id))?;
        let sessions_total = all_sessions.len() as i64;
        let sessions_eligible = all_sessions.iter().filter(|s| s.duty_eligible).count() as i64;
        let duty_minutes: i64 = all_sessions
            .iter()
            .filter_map(|s| s.total_minutes)
            .sum();

        let active_strikes = strikes::count_active(conn, user.id)?;

        Ok(MemberSummary {
            user_id: user.id,
            name: user.name.clone(),
            role: user.role.label().to_string(),
            days_present,
            days_on_duty,
            days_absent,
            sessions_total,
            sessions_eligible,
            duty_minutes,
            active_strikes,
            suspended: user.is_suspended(now),
        })
    }

    /// One summary row per member, for tables and export.
    pub fn club_summary(
        conn: &Connection,
        period: Option<&str>,
        now: NaiveDateTime,
    ) -> AppResult<Vec<MemberSummary>> {
        let members = users::list_users(conn)?;

        let mut out = Vec::with_capacity(members.len());
        for user in &members {
            out.push(Self::member_summary(conn, user, period, now)?);
        }
        Ok(out)
    }
}
