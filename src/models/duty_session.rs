use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A timed duty shift. Lifecycle: none → active → ended.
/// At most one active session per user; the DB enforces it with a
/// partial unique index on (user_id) WHERE is_active = 1.
#[derive(Debug, Clone, Serialize)]
pub struct DutySession {
    pub id: i32,
    pub user_id: i32,
    pub date: NaiveDate,                    // ⇔ duty_sessions.date (TEXT "YYYY-MM-DD")
    pub start_time: NaiveDateTime,          // ⇔ duty_sessions.start_time (ISO8601)
    pub end_time: Option<NaiveDateTime>,
    pub break_minutes: i64,
    pub total_minutes: Option<i64>,         // net minutes: (end-start)-break, floored at 0
    pub is_active: bool,
    pub duty_eligible: bool,
    pub created_at: String,
}

impl DutySession {
    /// Minutes elapsed so far (against `now` while active, against
    /// end_time once closed).
    pub fn elapsed_minutes(&self, now: NaiveDateTime) -> i64 {
        let end = self.end_time.unwrap_or(now);
        (end - self.start_time).num_minutes()
    }

    /// Net duty credit: elapsed minus break, never negative.
    pub fn net_minutes(elapsed: i64, break_minutes: i64) -> i64 {
        (elapsed - break_minutes).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_minutes_subtracts_break() {
        assert_eq!(DutySession::net_minutes(150, 0), 150);
        assert_eq!(DutySession::net_minutes(150, 30), 120);
    }

    #[test]
    fn net_minutes_floors_at_zero() {
        assert_eq!(DutySession::net_minutes(20, 45), 0);
    }
}
