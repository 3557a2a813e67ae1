use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::users;
use crate::errors::AppResult;
use crate::models::member_summary::MemberSummary;
use crate::ui::messages::header;
use crate::utils::colors::{RED, RESET, color_for_strikes};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

fn print_member(summary: &MemberSummary, cfg: &Config) {
    header(format!("Report for {}", summary.name));

    println!("Role:              {}", summary.role);
    println!("Days present:      {}", summary.days_present);
    println!("Days on duty:      {}", summary.days_on_duty);
    println!("Days absent:       {}", summary.days_absent);
    println!("Duty sessions:     {}", summary.sessions_total);
    println!("Eligible sessions: {}", summary.sessions_eligible);
    println!("Duty credit:       {}", mins2readable(summary.duty_minutes));
    println!(
        "Active strikes:    {}{}{}",
        color_for_strikes(summary.active_strikes, cfg.strike_threshold),
        summary.active_strikes,
        RESET
    );
    if summary.suspended {
        println!("Status:            {}SUSPENDED{}", RED, RESET);
    }
    println!();
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { user, period } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let now = chrono::Local::now().naive_local();

        if let Some(name) = user {
            let member = users::require_by_name(&pool.conn, name)?;
            let summary =
                ReportLogic::member_summary(&pool.conn, &member, period.as_deref(), now)?;
            print_member(&summary, cfg);
            return Ok(());
        }

        let rows = ReportLogic::club_summary(&pool.conn, period.as_deref(), now)?;

        let mut table = Table::new(vec![
            Column {
                header: "Name".to_string(),
                width: 20,
            },
            Column {
                header: "Present".to_string(),
                width: 8,
            },
            Column {
                header: "Duty".to_string(),
                width: 5,
            },
            Column {
                header: "Absent".to_string(),
                width: 7,
            },
            Column {
                header: "Credit".to_string(),
                width: 9,
            },
            Column {
                header: "Strikes".to_string(),
                width: 8,
            },
            Column {
                header: "Susp.".to_string(),
                width: 6,
            },
        ]);

        for s in &rows {
            table.add_row(vec![
                s.name.clone(),
                s.days_present.to_string(),
                s.days_on_duty.to_string(),
                s.days_absent.to_string(),
                mins2readable(s.duty_minutes),
                format!(
                    "{}{}{}",
                    color_for_strikes(s.active_strikes, cfg.strike_threshold),
                    s.active_strikes,
                    RESET
                ),
                if s.suspended {
                    format!("{RED}yes{RESET}")
                } else {
                    "no".to_string()
                },
            ]);
        }

        println!("{}", table.render());
        println!("{} member(s)", rows.len());
    }

    Ok(())
}
