use chrono::NaiveDateTime;
use serde::Serialize;

/// Periodic check-in during an active duty session. `hour_index` is the
/// number of full hours elapsed since session start at log time; the
/// (session_id, hour_index) pair is unique among non-break rows, so a
/// break marker never blocks the hour's real log.
#[derive(Debug, Clone, Serialize)]
pub struct HourlyLog {
    pub id: i32,
    pub session_id: i32,
    pub log_time: NaiveDateTime,
    pub hour_index: i64,
    pub previous_hour_work: String,
    pub next_hour_plan: String,
    pub is_break: bool,
    pub created_at: String,
}
