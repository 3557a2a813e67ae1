use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckinLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::{date, time};

/// Record an hourly check-in against the member's active duty session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        user,
        date: date_arg,
        at,
        prev,
        next,
        is_break,
    } = cmd
    {
        let log_time = match at {
            Some(t) => {
                let day = match date_arg {
                    Some(raw) => {
                        date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?
                    }
                    None => date::today(),
                };
                time::at(day, t)?
            }
            None => chrono::Local::now().naive_local(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        CheckinLogic::record(&mut pool.conn, cfg, user, log_time, prev, next, *is_break)?;

        let kind = if *is_break { "Break" } else { "Check-in" };
        success(format!(
            "{} recorded for {} at {}",
            kind,
            user,
            log_time.format("%H:%M")
        ));
    }

    Ok(())
}
