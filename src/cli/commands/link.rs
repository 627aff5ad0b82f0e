use crate::cli::parser::{Commands, LinkCmd};
use crate::config::Config;
use crate::db::links;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::ResourceLink;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::{Column, Table};

/// Handle the `link` subcommand tree.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Link(link_cmd) = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let conn = &pool.conn;

    match link_cmd {
        LinkCmd::Add {
            title,
            url,
            category,
        } => {
            let link = ResourceLink::new(title.clone(), url.clone(), category.clone());
            let id = links::insert_link(conn, &link)?;

            let stored = links::get_link(conn, id)?;
            success(format!("Resource link {} added.", id));
            print_links(std::slice::from_ref(&stored));
        }

        LinkCmd::List { json } => {
            let stored = links::list_links(conn)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&stored)?);
            } else if stored.is_empty() {
                info("No resource links.");
            } else {
                print_links(&stored);
            }
        }

        LinkCmd::Edit {
            id,
            title,
            url,
            category,
            clear_category,
        } => {
            let mut link = links::get_link(conn, *id)?;

            if let Some(t) = title {
                link.title = t.clone();
            }
            if let Some(u) = url {
                link.url = u.clone();
            }
            if let Some(c) = category {
                link.category = Some(c.clone());
            }
            if *clear_category {
                link.category = None;
            }

            links::update_link(conn, &link)?;

            success(format!("Resource link {} updated.", id));
            print_links(std::slice::from_ref(&link));
        }

        LinkCmd::Del { id } => {
            links::delete_link(conn, *id)?;
            success(format!("Resource link {} deleted.", id));
        }
    }

    Ok(())
}

fn print_links(listed: &[ResourceLink]) {
    let title_width = listed
        .iter()
        .map(|l| l.title.len())
        .max()
        .unwrap_or(5)
        .max(5);
    let url_width = listed.iter().map(|l| l.url.len()).max().unwrap_or(3).max(3);

    let mut table = Table::new(vec![
        Column {
            header: "ID".into(),
            width: 4,
        },
        Column {
            header: "TITLE".into(),
            width: title_width,
        },
        Column {
            header: "URL".into(),
            width: url_width,
        },
        Column {
            header: "CATEGORY".into(),
            width: 12,
        },
    ]);

    for l in listed {
        let category = match &l.category {
            Some(c) => c.clone(),
            None => format!("{GREY}--{RESET}"),
        };
        table.add_row(vec![l.id.to_string(), l.title.clone(), l.url.clone(), category]);
    }

    println!("{}", table.render());
}
