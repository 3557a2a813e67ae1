use serde::Serialize;

/// Per-member report row: attendance counts, duty credit and the
/// current strike/suspension state.
#[derive(Debug, Clone, Serialize)]
pub struct MemberSummary {
    pub user_id: i32,
    pub name: String,
    pub role: String,
    pub days_present: i64,
    pub days_on_duty: i64,
    pub days_absent: i64,
    pub sessions_total: i64,
    pub sessions_eligible: i64,
    pub duty_minutes: i64,
    pub active_strikes: i64,
    pub suspended: bool,
}
