use crate::cli::parser::DutyCmd;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::hourly_logs;
use crate::db::pool::DbPool;
use crate::db::sessions;
use crate::db::users;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREY, RESET};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::{date, time};
use chrono::NaiveDateTime;

/// Resolve an optional --date/--at pair into a timestamp. Missing parts
/// fall back to the wall clock, so the date of the result always matches
/// the requested day.
fn resolve_moment(date_arg: Option<&String>, at: Option<&String>) -> AppResult<NaiveDateTime> {
    let day = match date_arg {
        Some(raw) => date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?,
        None => date::today(),
    };

    match at {
        Some(t) => time::at(day, t),
        None => Ok(day.and_time(chrono::Local::now().time())),
    }
}

pub fn handle(cmd: &DutyCmd, cfg: &Config) -> AppResult<()> {
    match cmd {
        DutyCmd::Start { user, date, at } => {
            let start_time = resolve_moment(date.as_ref(), at.as_ref())?;
            let day = start_time.date();
            let now = chrono::Local::now().naive_local();

            let mut pool = DbPool::new(&cfg.database)?;
            let session_id = SessionLogic::start(&mut pool.conn, user, day, start_time, now)?;

            success(format!(
                "Duty session {} started for {} at {}",
                session_id,
                user,
                start_time.format("%Y-%m-%d %H:%M")
            ));
            info(format!(
                "Minimum for eligibility: {}",
                mins2readable(cfg.duty_min_minutes)
            ));
        }

        DutyCmd::End {
            user,
            date,
            at,
            break_minutes,
        } => {
            let end_time = resolve_moment(date.as_ref(), at.as_ref())?;
            let now = chrono::Local::now().naive_local();

            let mut pool = DbPool::new(&cfg.database)?;
            let close =
                SessionLogic::end(&mut pool.conn, cfg, user, end_time, *break_minutes, now)?;

            let total = close.session.total_minutes.unwrap_or(0);
            success(format!(
                "Duty session {} ended: {} net ({} break)",
                close.session.id,
                mins2readable(total),
                mins2readable(*break_minutes)
            ));

            if close.session.duty_eligible {
                success("Session counts toward club duty.");
            } else {
                warning(format!(
                    "Session below the {} minimum; no duty credit.",
                    mins2readable(cfg.duty_min_minutes)
                ));
            }

            for v in &close.violations {
                warning(format!("Strike issued: {}", v.label()));
            }
        }

        DutyCmd::Status { user } => {
            let pool = DbPool::new(&cfg.database)?;
            match SessionLogic::active(&pool.conn, user)? {
                Some(session) => {
                    let now = chrono::Local::now().naive_local();
                    info(format!(
                        "Active session {} for {}: started {}, {} elapsed",
                        session.id,
                        user,
                        session.start_time.format("%Y-%m-%d %H:%M"),
                        mins2readable(session.elapsed_minutes(now))
                    ));

                    for log in hourly_logs::list_for_session(&pool.conn, session.id)? {
                        let note = if log.is_break {
                            "(break)".to_string()
                        } else {
                            log.previous_hour_work.clone()
                        };
                        println!(
                            "    {}  hour {}  {}",
                            log.log_time.format("%H:%M"),
                            log.hour_index + 1,
                            note
                        );
                    }
                }
                None => info(format!("No active duty session for {}", user)),
            }
        }

        DutyCmd::List { user, period } => {
            let pool = DbPool::new(&cfg.database)?;

            let user_id = match user {
                Some(name) => Some(users::require_by_name(&pool.conn, name)?.id),
                None => None,
            };
            let rows = sessions::list_filtered(&pool.conn, period.as_deref(), user_id)?;

            let mut table = Table::new(vec![
                Column {
                    header: "Id".to_string(),
                    width: 5,
                },
                Column {
                    header: "Date".to_string(),
                    width: 11,
                },
                Column {
                    header: "Start".to_string(),
                    width: 6,
                },
                Column {
                    header: "End".to_string(),
                    width: 6,
                },
                Column {
                    header: "Break".to_string(),
                    width: 7,
                },
                Column {
                    header: "Total".to_string(),
                    width: 8,
                },
                Column {
                    header: "Eligible".to_string(),
                    width: 8,
                },
            ]);

            for s in &rows {
                let end = match s.end_time {
                    Some(e) => e.format("%H:%M").to_string(),
                    None => format!("{GREY}--{RESET}"),
                };
                let total = match s.total_minutes {
                    Some(t) => time::format_minutes(t),
                    None => format!("{GREY}--{RESET}"),
                };
                table.add_row(vec![
                    s.id.to_string(),
                    s.date.format("%Y-%m-%d").to_string(),
                    s.start_time.format("%H:%M").to_string(),
                    end,
                    time::format_minutes(s.break_minutes),
                    total,
                    if s.is_active {
                        format!("{GREY}open{RESET}")
                    } else if s.duty_eligible {
                        "yes".to_string()
                    } else {
                        "no".to_string()
                    },
                ]);
            }

            println!("{}", table.render());
            println!("{} session(s)", rows.len());
        }
    }

    Ok(())
}
