use crate::cli::parser::{Commands, TimerCmd};
use crate::config::Config;
use crate::core::timer::{check_interval, elapsed_minutes};
use crate::core::week::Clock;
use crate::db::pool::DbPool;
use crate::db::sessions;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time::{format_db_datetime, format_minutes, parse_user_datetime};

/// Handle the `timer` subcommand tree.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Timer(timer_cmd) = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let conn = &pool.conn;
    let clock = Clock::from_config(cfg)?;

    match timer_cmd {
        TimerCmd::Start { memo } => {
            let session = sessions::start_if_none_open(conn, clock.now(), memo.as_deref())?;
            success(format!(
                "Timer started at {} (session {}).",
                format_db_datetime(session.started_at),
                session.id
            ));
        }

        TimerCmd::Stop => {
            let session = sessions::stop_open(conn, clock.now())?;
            success(format!(
                "Timer stopped: {} min ({}).",
                session.minutes.unwrap_or(0),
                format_minutes(session.minutes.unwrap_or(0))
            ));
        }

        TimerCmd::Status => match sessions::open_session(conn)? {
            Some(open) => {
                let running = elapsed_minutes(open.started_at, clock.now());
                info(format!(
                    "Timer running since {} ({} so far, session {}).",
                    format_db_datetime(open.started_at),
                    format_minutes(running),
                    open.id
                ));
                if let Some(memo) = &open.memo {
                    println!("  memo: {}", memo);
                }
            }
            None => info("No timer is currently running."),
        },

        TimerCmd::Correct {
            id,
            started,
            ended,
            memo,
        } => {
            let started_at = parse_user_datetime(started)?;
            let ended_at = parse_user_datetime(ended)?;
            check_interval(started_at, ended_at)?;

            let session =
                sessions::update_session(conn, *id, started_at, ended_at, memo.as_deref())?;
            success(format!(
                "Session {} corrected: {} → {}, {} min.",
                session.id,
                format_db_datetime(started_at),
                format_db_datetime(ended_at),
                session.minutes.unwrap_or(0)
            ));
        }

        TimerCmd::Del { id } => {
            sessions::delete_session(conn, *id)?;
            success(format!("Session {} deleted.", id));
        }
    }

    Ok(())
}
