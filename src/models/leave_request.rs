use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(LeaveStatus::Pending),
            "approved" => Some(LeaveStatus::Approved),
            "rejected" => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeaveType {
    Sick,
    Personal,
    Academic,
}

impl LeaveType {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "sick",
            LeaveType::Personal => "personal",
            LeaveType::Academic => "academic",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "sick" => Some(LeaveType::Sick),
            "personal" => Some(LeaveType::Personal),
            "academic" => Some(LeaveType::Academic),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::from_db_str(&code.to_lowercase())
    }
}

/// Plain pending → approved/rejected transition with an approver
/// reference and optional rejection reason.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveRequest {
    pub id: i32,
    pub user_id: i32,
    pub request_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub decided_by: Option<i32>,
    pub rejection_reason: Option<String>,
    pub created_at: String,
    pub decided_at: Option<String>,
}
