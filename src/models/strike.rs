use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrikeReason {
    MissedHourlyLog,
    InsufficientDutyHours,
    ExcessiveBreak,
    Manual,
}

impl StrikeReason {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            StrikeReason::MissedHourlyLog => "missed_hourly_log",
            StrikeReason::InsufficientDutyHours => "insufficient_duty_hours",
            StrikeReason::ExcessiveBreak => "excessive_break",
            StrikeReason::Manual => "manual",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "missed_hourly_log" => Some(StrikeReason::MissedHourlyLog),
            "insufficient_duty_hours" => Some(StrikeReason::InsufficientDutyHours),
            "excessive_break" => Some(StrikeReason::ExcessiveBreak),
            "manual" => Some(StrikeReason::Manual),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::from_db_str(&code.to_lowercase().replace('-', "_"))
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrikeReason::MissedHourlyLog => "Missed hourly log",
            StrikeReason::InsufficientDutyHours => "Insufficient duty hours",
            StrikeReason::ExcessiveBreak => "Excessive break",
            StrikeReason::Manual => "Manual",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Minor,
    Major,
}

impl Severity {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Major => "major",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "minor" => Some(Severity::Minor),
            "major" => Some(Severity::Major),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::from_db_str(&code.to_lowercase())
    }
}

/// A recorded rule violation. `strike_number` is the user's active-strike
/// count at the moment of issue (after this strike).
#[derive(Debug, Clone, Serialize)]
pub struct Strike {
    pub id: i32,
    pub user_id: i32,
    pub reason: StrikeReason,
    pub severity: Severity,
    pub detail: String,
    pub strike_number: i32,
    pub is_active: bool,
    pub issued_at: String,
    pub resolved_by: Option<i32>,
    pub resolved_at: Option<String>,
}
