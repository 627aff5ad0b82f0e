use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::week::Clock;
use crate::db::pool::DbPool;
use crate::db::sessions;
use crate::errors::AppResult;
use crate::models::WorkSession;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date::month_bounds;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_db_datetime, format_hours_minutes};
use chrono::Datelike;

/// Handle `sessions` (month listing) and `summary` (month total).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let conn = &pool.conn;
    let clock = Clock::from_config(cfg)?;

    match cmd {
        Commands::Sessions { year, month, json } => {
            // unspecified parts default to the current civil month
            let now = clock.now();
            let y = year.unwrap_or_else(|| now.year());
            let m = month.unwrap_or_else(|| now.month());
            let (start, end) = month_bounds(y, m)?;

            let listed = sessions::list_window(conn, start, end)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&listed)?);
            } else if listed.is_empty() {
                info(format!("No sessions in {y:04}-{m:02}."));
            } else {
                print_sessions(&listed);
            }
        }

        Commands::Summary { year, month } => {
            let (start, end) = month_bounds(*year, *month)?;
            let total = sessions::total_minutes(conn, start, end)?;
            println!(
                "Total for {:04}-{:02}: {} min ({})",
                year,
                month,
                total,
                format_hours_minutes(total)
            );
        }

        _ => {}
    }

    Ok(())
}

fn print_sessions(listed: &[WorkSession]) {
    let mut table = Table::new(vec![
        Column {
            header: "ID".into(),
            width: 4,
        },
        Column {
            header: "STARTED".into(),
            width: 19,
        },
        Column {
            header: "ENDED".into(),
            width: 19,
        },
        Column {
            header: "MIN".into(),
            width: 5,
        },
        Column {
            header: "MEMO".into(),
            width: 20,
        },
    ]);

    for s in listed {
        let ended = match s.ended_at {
            Some(e) => format_db_datetime(e),
            None => format!("{GREY}running{RESET}"),
        };
        let minutes = match s.minutes {
            Some(m) => m.to_string(),
            None => format!("{GREY}--{RESET}"),
        };
        table.add_row(vec![
            s.id.to_string(),
            format_db_datetime(s.started_at),
            ended,
            minutes,
            s.memo.clone().unwrap_or_default(),
        ]);
    }

    println!("{}", table.render());
}
