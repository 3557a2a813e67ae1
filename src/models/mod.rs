pub mod attendance_record;
pub mod duty_session;
pub mod hourly_log;
pub mod leave_request;
pub mod member_summary;
pub mod strike;
pub mod user;
