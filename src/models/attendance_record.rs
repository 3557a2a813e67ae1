use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceStatus {
    Present,
    OnClubDuty,
    Absent,
}

impl AttendanceStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::OnClubDuty => "on_club_duty",
            AttendanceStatus::Absent => "absent",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "present" => Some(AttendanceStatus::Present),
            "on_club_duty" => Some(AttendanceStatus::OnClubDuty),
            "absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }

    /// CLI input: accept short aliases as well as the canonical codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "p" | "present" => Some(AttendanceStatus::Present),
            "d" | "duty" | "on_club_duty" => Some(AttendanceStatus::OnClubDuty),
            "a" | "absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::OnClubDuty => "On club duty",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

/// One row per user per date; uniqueness is enforced by the schema.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub id: i32,
    pub user_id: i32,
    pub date: NaiveDate,           // ⇔ attendance.date (TEXT "YYYY-MM-DD")
    pub status: AttendanceStatus,
    pub is_approved: bool,
    pub approved_by: Option<i32>,
    pub duty_eligible: bool,
    pub created_at: String,
}

impl AttendanceRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
