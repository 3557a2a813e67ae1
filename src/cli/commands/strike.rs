use crate::cli::parser::StrikeCmd;
use crate::config::Config;
use crate::core::strikes::StrikeLogic;
use crate::db::pool::DbPool;
use crate::db::{strikes, users};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::colors::{GREY, RESET, color_for_strikes};
use crate::utils::table::{Column, Table};
use crate::models::strike::{Severity, StrikeReason};

pub fn handle(cmd: &StrikeCmd, cfg: &Config) -> AppResult<()> {
    match cmd {
        StrikeCmd::Issue {
            user,
            reason,
            severity,
            detail,
        } => {
            let reason = StrikeReason::from_code(reason)
                .ok_or_else(|| AppError::InvalidReason(reason.clone()))?;
            let severity = Severity::from_code(severity)
                .ok_or_else(|| AppError::InvalidSeverity(severity.clone()))?;

            let mut pool = DbPool::new(&cfg.database)?;
            let now = chrono::Local::now().naive_local();

            let id = StrikeLogic::issue(&mut pool.conn, cfg, user, reason, severity, detail, now)?;
            success(format!("Strike {} issued to {} ({})", id, user, reason.label()));

            // Report the post-issue state, suspension included.
            let member = users::require_by_name(&pool.conn, user)?;
            if member.is_suspended(now)
                && let Some(until) = member.suspended_until
            {
                warning(format!(
                    "{} reached {} active strikes and is suspended until {}",
                    user,
                    member.strike_count,
                    until.format("%Y-%m-%d %H:%M")
                ));
            }
        }

        StrikeCmd::Resolve {
            strike_id,
            resolver,
        } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let now = chrono::Local::now().naive_local();

            let strike = StrikeLogic::resolve(&mut pool.conn, cfg, *strike_id, resolver, now)?;
            success(format!(
                "Strike {} resolved by {} ({})",
                strike.id,
                resolver,
                strike.reason.label()
            ));
        }

        StrikeCmd::List { user } => {
            let pool = DbPool::new(&cfg.database)?;
            let member = users::require_by_name(&pool.conn, user)?;
            let rows = strikes::list_for_user(&pool.conn, member.id)?;

            let mut table = Table::new(vec![
                Column {
                    header: "Id".to_string(),
                    width: 5,
                },
                Column {
                    header: "Reason".to_string(),
                    width: 26,
                },
                Column {
                    header: "Severity".to_string(),
                    width: 9,
                },
                Column {
                    header: "Issued".to_string(),
                    width: 20,
                },
                Column {
                    header: "State".to_string(),
                    width: 9,
                },
            ]);

            for s in &rows {
                let state = if s.is_active {
                    "active".to_string()
                } else {
                    format!("{GREY}resolved{RESET}")
                };
                table.add_row(vec![
                    s.id.to_string(),
                    s.reason.label().to_string(),
                    s.severity.to_db_str().to_string(),
                    s.issued_at.clone(),
                    state,
                ]);
            }

            println!("{}", table.render());

            let active = rows.iter().filter(|s| s.is_active).count() as i64;
            println!(
                "{} strike(s), {}{} active{}",
                rows.len(),
                color_for_strikes(active, cfg.strike_threshold),
                active,
                RESET
            );
        }
    }

    Ok(())
}
