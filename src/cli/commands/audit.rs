use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::audit::load_audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, YELLOW};

/// Print the internal audit trail, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Audit { print } = cmd
        && *print
    {
        let pool = DbPool::new(&cfg.database)?;
        let rows = load_audit(&pool.conn)?;

        header("Audit log");

        if rows.is_empty() {
            println!("{}(empty){}", GREY, RESET);
            return Ok(());
        }

        for (date, operation, message) in rows {
            println!(
                "{}{}{}  {}{:<22}{}  {}",
                GREY, date, RESET, YELLOW, operation, RESET, message
            );
        }
    }

    Ok(())
}
