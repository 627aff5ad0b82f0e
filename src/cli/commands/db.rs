use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::info::print_db_info;
use crate::db::migrate::{integrity_check, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};

/// Handle the `db` maintenance subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Database schema is up to date.");
        }

        if *check {
            if integrity_check(&pool.conn)? {
                success("Database integrity: ok");
            } else {
                error("Database integrity check FAILED");
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM")?;
            success("Database optimized (VACUUM).");
        }

        if *info {
            print_db_info(&mut pool, &cfg.database)?;
        }
    }
    Ok(())
}
