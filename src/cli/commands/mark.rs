use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attendance_record::AttendanceStatus;
use crate::ui::messages::success;
use crate::utils::date;

/// Mark a member's attendance for a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark { user, date, status } = cmd {
        let day = match date {
            Some(raw) => {
                date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?
            }
            None => date::today(),
        };

        let status = AttendanceStatus::from_code(status)
            .ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let now = chrono::Local::now().naive_local();

        AttendanceLogic::mark(&mut pool.conn, user, day, status, now)?;

        success(format!("{} marked {} on {}", user, status.label(), day));
    }

    Ok(())
}
