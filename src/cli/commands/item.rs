use crate::cli::parser::{Commands, ItemCmd};
use crate::config::Config;
use crate::core::annotate::{annotate, annotate_all};
use crate::core::week::{Clock, week_start};
use crate::db::items;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{AnnotatedItem, PriorityItem};
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, RESET, color_for_status};
use crate::utils::date::weekday_label;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;
use std::collections::BTreeMap;

/// Handle the `item` subcommand tree.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Item(item_cmd) = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let conn = &pool.conn;
    let clock = Clock::from_config(cfg)?;

    match item_cmd {
        //
        // CREATE
        //
        ItemCmd::Add {
            book,
            weekday,
            hour,
            minute,
            flags,
            links,
            memo,
        } => {
            check_rule(*weekday, *hour, *minute)?;
            let flags = parse_flags(flags)?;

            let item = PriorityItem::new(
                book.clone(),
                *weekday,
                *hour,
                *minute,
                flags,
                links.clone(),
                memo.clone(),
            );
            let id = items::insert_item(conn, &item)?;

            let stored = items::get_item(conn, id)?;
            success(format!("Priority item {} added.", id));
            print_items(&[annotate(stored, clock.now())]);
        }

        //
        // READ
        //
        ItemCmd::List { query, json } => {
            let stored = items::list_items(conn, query.as_deref())?;
            let annotated = annotate_all(stored, clock.now());

            if *json {
                println!("{}", serde_json::to_string_pretty(&annotated)?);
            } else if annotated.is_empty() {
                info("No priority items.");
            } else {
                print_items(&annotated);
            }
        }

        ItemCmd::Show { id, json } => {
            let stored = items::get_item(conn, *id)?;
            let out = annotate(stored, clock.now());

            if *json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_item_detail(&out);
            }
        }

        //
        // UPDATE
        //
        ItemCmd::Edit {
            id,
            book,
            weekday,
            hour,
            minute,
            flags,
            links,
            memo,
            clear_flags,
            clear_links,
            clear_memo,
        } => {
            let mut item = items::get_item(conn, *id)?;

            if let Some(b) = book {
                item.book = b.clone();
            }
            if let Some(w) = weekday {
                item.due_weekday = *w;
            }
            if let Some(h) = hour {
                item.due_hour = *h;
            }
            if let Some(m) = minute {
                item.due_minute = *m;
            }
            // flags/links replace wholesale when given, like a full
            // field assignment in an update payload
            if !flags.is_empty() {
                item.flags = parse_flags(flags)?;
            }
            if !links.is_empty() {
                item.links = links.clone();
            }
            if let Some(m) = memo {
                item.memo = Some(m.clone());
            }
            if *clear_flags {
                item.flags.clear();
            }
            if *clear_links {
                item.links.clear();
            }
            if *clear_memo {
                item.memo = None;
            }

            check_rule(item.due_weekday, item.due_hour, item.due_minute)?;
            items::update_item(conn, &item)?;

            success(format!("Priority item {} updated.", id));
            print_items(&[annotate(item, clock.now())]);
        }

        //
        // DELETE (hard)
        //
        ItemCmd::Del { id } => {
            items::delete_item(conn, *id)?;
            success(format!("Priority item {} deleted.", id));
        }

        //
        // COMPLETION MARKER
        //
        ItemCmd::Complete { id } => {
            let now = clock.now();
            // the marker is always the Monday of the current week;
            // re-completing within the same week is a no-op in effect
            let ws = week_start(now).date();
            items::set_completed_week(conn, *id, Some(ws))?;

            let stored = items::get_item(conn, *id)?;
            success(format!("Priority item {} completed for week {}.", id, ws));
            print_items(&[annotate(stored, now)]);
        }

        ItemCmd::Uncomplete { id } => {
            items::set_completed_week(conn, *id, None)?;

            let stored = items::get_item(conn, *id)?;
            success(format!("Priority item {} completion cleared.", id));
            print_items(&[annotate(stored, clock.now())]);
        }
    }

    Ok(())
}

/// Validate the recurrence rule fields before any write.
fn check_rule(weekday: u32, hour: u32, minute: u32) -> AppResult<()> {
    if weekday > 6 {
        return Err(AppError::InvalidWeekday(weekday));
    }
    if hour > 23 {
        return Err(AppError::InvalidHour(hour));
    }
    if minute > 59 {
        return Err(AppError::InvalidMinute(minute));
    }
    Ok(())
}

/// Parse repeated --flag arguments: NAME or NAME=true/false.
fn parse_flags(raw: &[String]) -> AppResult<BTreeMap<String, bool>> {
    let mut out = BTreeMap::new();
    for token in raw {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::InvalidFlag(token.to_string()));
        }
        match token.split_once('=') {
            None => {
                out.insert(token.to_string(), true);
            }
            Some((name, value)) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(AppError::InvalidFlag(token.to_string()));
                }
                let value = match value.trim().to_lowercase().as_str() {
                    "1" | "true" | "t" | "y" | "yes" => true,
                    "0" | "false" | "f" | "n" | "no" => false,
                    _ => return Err(AppError::InvalidFlag(token.to_string())),
                };
                out.insert(name.to_string(), value);
            }
        }
    }
    Ok(out)
}

fn print_items(items: &[AnnotatedItem]) {
    let book_width = items
        .iter()
        .map(|o| o.item.book.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut table = Table::new(vec![
        Column {
            header: "ID".into(),
            width: 4,
        },
        Column {
            header: "BOOK".into(),
            width: book_width,
        },
        Column {
            header: "DUE".into(),
            width: 9,
        },
        Column {
            header: "EFFECTIVE".into(),
            width: 16,
        },
        Column {
            header: "STATUS".into(),
            width: 18,
        },
        Column {
            header: "LEFT".into(),
            width: 8,
        },
        Column {
            header: "DONE".into(),
            width: 10,
        },
    ]);

    for o in items {
        let due = format!(
            "{} {:02}:{:02}",
            weekday_label(o.item.due_weekday),
            o.item.due_hour,
            o.item.due_minute
        );
        let status = format!(
            "{}{}{}",
            color_for_status(o.status),
            o.status.as_str(),
            RESET
        );
        let done = match o.item.completed_week_start {
            Some(d) => d.to_string(),
            None => format!("{GREY}--{RESET}"),
        };
        table.add_row(vec![
            o.item.id.to_string(),
            o.item.book.clone(),
            due,
            o.effective_due_at.format("%Y-%m-%d %H:%M").to_string(),
            status,
            format_minutes(o.minutes_until_due),
            done,
        ]);
    }

    println!("{}", table.render());
}

fn print_item_detail(o: &AnnotatedItem) {
    print_items(std::slice::from_ref(o));

    if !o.item.flags.is_empty() {
        println!("  flags:");
        for (name, value) in &o.item.flags {
            let mark = if *value { "✓" } else { " " };
            println!("    [{}] {}", mark, name);
        }
    }
    if !o.item.links.is_empty() {
        println!("  links:");
        for url in &o.item.links {
            println!("    {}", url);
        }
    }
    if let Some(memo) = &o.item.memo {
        println!("  memo: {}", memo);
    }
    println!(
        "  minutes until due: {} ({})",
        o.minutes_until_due,
        format_minutes(o.minutes_until_due)
    );
}
