use crate::cli::parser::LeaveCmd;
use crate::config::Config;
use crate::core::leave::LeaveLogic;
use crate::db::pool::DbPool;
use crate::db::{leave, users};
use crate::errors::{AppError, AppResult};
use crate::models::leave_request::LeaveType;
use crate::ui::messages::success;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &LeaveCmd, cfg: &Config) -> AppResult<()> {
    match cmd {
        LeaveCmd::Request {
            user,
            leave_type,
            from,
            to,
            reason,
        } => {
            let leave_type = LeaveType::from_code(leave_type)
                .ok_or_else(|| AppError::InvalidLeaveType(leave_type.clone()))?;
            let from_date =
                date::parse_date(from).ok_or_else(|| AppError::InvalidDate(from.clone()))?;
            let to_date = date::parse_date(to).ok_or_else(|| AppError::InvalidDate(to.clone()))?;

            let mut pool = DbPool::new(&cfg.database)?;
            let id =
                LeaveLogic::request(&mut pool.conn, user, leave_type, from_date, to_date, reason)?;

            success(format!(
                "Leave request {} filed for {} ({} → {})",
                id, user, from_date, to_date
            ));
        }

        LeaveCmd::Approve {
            request_id,
            decider,
        } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let now = chrono::Local::now().naive_local();

            let request =
                LeaveLogic::decide(&mut pool.conn, *request_id, true, decider, None, now)?;
            success(format!(
                "Leave request {} approved by {}",
                request.id, decider
            ));
        }

        LeaveCmd::Reject {
            request_id,
            decider,
            reason,
        } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let now = chrono::Local::now().naive_local();

            let request = LeaveLogic::decide(
                &mut pool.conn,
                *request_id,
                false,
                decider,
                reason.as_deref(),
                now,
            )?;
            success(format!(
                "Leave request {} rejected by {}",
                request.id, decider
            ));
        }

        LeaveCmd::List { user } => {
            let pool = DbPool::new(&cfg.database)?;

            let user_id = match user {
                Some(name) => Some(users::require_by_name(&pool.conn, name)?.id),
                None => None,
            };
            let rows = leave::list_requests(&pool.conn, user_id)?;

            let mut table = Table::new(vec![
                Column {
                    header: "Id".to_string(),
                    width: 5,
                },
                Column {
                    header: "User".to_string(),
                    width: 6,
                },
                Column {
                    header: "Type".to_string(),
                    width: 10,
                },
                Column {
                    header: "From".to_string(),
                    width: 11,
                },
                Column {
                    header: "To".to_string(),
                    width: 11,
                },
                Column {
                    header: "Status".to_string(),
                    width: 9,
                },
            ]);

            for r in &rows {
                table.add_row(vec![
                    r.id.to_string(),
                    r.user_id.to_string(),
                    r.request_type.to_db_str().to_string(),
                    r.from_date.format("%Y-%m-%d").to_string(),
                    r.to_date.format("%Y-%m-%d").to_string(),
                    match r.status.to_db_str() {
                        "pending" => format!("{GREY}pending{RESET}"),
                        other => other.to_string(),
                    },
                ]);
            }

            println!("{}", table.render());
            println!("{} request(s)", rows.len());
        }
    }

    Ok(())
}
