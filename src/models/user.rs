use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Student,
    CoreTeam,
    Teacher,
}

impl Role {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::CoreTeam => "core_team",
            Role::Teacher => "teacher",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Role::Student),
            "core_team" => Some(Role::CoreTeam),
            "teacher" => Some(Role::Teacher),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (accepts dashes and case variants)
    pub fn from_code(code: &str) -> Option<Self> {
        Role::from_db_str(&code.to_lowercase().replace('-', "_"))
    }

    /// Core team and teachers may approve records, resolve strikes
    /// and decide leave requests.
    pub fn can_moderate(&self) -> bool {
        matches!(self, Role::CoreTeam | Role::Teacher)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::CoreTeam => "Core team",
            Role::Teacher => "Teacher",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub role: Role,
    pub strike_count: i32,                     // ⇔ users.strike_count
    pub suspended_until: Option<NaiveDateTime>, // ⇔ users.suspended_until (TEXT, ISO8601)
    pub created_at: String,
}

impl User {
    /// Suspension gate: the user is suspended while `suspended_until`
    /// lies in the future. Re-evaluated per request, no background sweep.
    pub fn is_suspended(&self, now: NaiveDateTime) -> bool {
        match self.suspended_until {
            Some(until) => until > now,
            None => false,
        }
    }
}
