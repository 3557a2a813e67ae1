use crate::cli::parser::UserCmd;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::users;
use crate::errors::{AppError, AppResult};
use crate::models::user::Role;
use crate::ui::messages::success;
use crate::utils::colors::{GREY, RESET, color_for_strikes};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &UserCmd, cfg: &Config) -> AppResult<()> {
    match cmd {
        UserCmd::Add { name, role } => {
            let role = Role::from_code(role).ok_or_else(|| AppError::InvalidRole(role.clone()))?;

            let pool = DbPool::new(&cfg.database)?;
            users::insert_user(&pool.conn, name, role).map_err(|e| match e {
                AppError::Db(ref raw) if AppError::is_unique_violation(raw) => {
                    AppError::Other(format!("Member '{}' is already registered", name))
                }
                other => other,
            })?;

            success(format!("Registered {} ({})", name, role.label()));
        }

        UserCmd::List => {
            let pool = DbPool::new(&cfg.database)?;
            let members = users::list_users(&pool.conn)?;

            let mut table = Table::new(vec![
                Column {
                    header: "Name".to_string(),
                    width: 20,
                },
                Column {
                    header: "Role".to_string(),
                    width: 12,
                },
                Column {
                    header: "Strikes".to_string(),
                    width: 8,
                },
                Column {
                    header: "Suspended until".to_string(),
                    width: 20,
                },
            ]);

            for u in &members {
                let strikes = format!(
                    "{}{}{}",
                    color_for_strikes(u.strike_count as i64, cfg.strike_threshold),
                    u.strike_count,
                    RESET
                );
                let suspended = match u.suspended_until {
                    Some(until) => until.format("%Y-%m-%d %H:%M").to_string(),
                    None => format!("{GREY}-{RESET}"),
                };
                table.add_row(vec![
                    u.name.clone(),
                    u.role.label().to_string(),
                    strikes,
                    suspended,
                ]);
            }

            println!("{}", table.render());
            println!("{} member(s)", members.len());
        }
    }

    Ok(())
}
