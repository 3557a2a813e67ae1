use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Approve an attendance record (core team / teacher only).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Approve {
        record_id,
        approver,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let record = AttendanceLogic::approve(&mut pool.conn, *record_id, approver)?;

        success(format!(
            "Record {} ({}) approved by {}",
            record.id,
            record.date_str(),
            approver
        ));
    }

    Ok(())
}
