pub mod attendance;
pub mod checkin;
pub mod leave;
pub mod report;
pub mod session;
pub mod strikes;
