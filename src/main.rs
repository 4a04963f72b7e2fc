//! Interactive console over the businesses list.
//!
//! Every stdin line is an intent: `/page N SIZE`, `/category NAME`
//! (`/category` alone clears it), `/new NAME`, `/refresh`, `/quit`; any
//! other line is taken as the search term.

use std::process;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};

use negocios_admin::dto::negocio::NegocioRow;
use negocios_admin::forms::negocio::NegocioForm;
use negocios_admin::models::config::ConsoleConfig;
use negocios_admin::notices::{Notice, NoticeBus};
use negocios_admin::pagination::PAGE_SIZE_OPTIONS;
use negocios_admin::query::QuerySnapshot;
use negocios_admin::repository::HttpRepository;
use negocios_admin::services::negocios::{negocio_list, save_negocio};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Page { number: usize, size: usize },
    Category(Option<String>),
    New(String),
    Refresh,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Search(line.to_string()));
    };
    let (name, args) = rest.split_once(' ').unwrap_or((rest, ""));
    let args = args.trim();

    match name {
        "page" => {
            let mut parts = args.split_whitespace();
            let number = parts.next().and_then(|n| n.parse::<usize>().ok());
            let size = parts.next().and_then(|s| s.parse::<usize>().ok());
            match (number, size) {
                (Some(number), Some(size))
                    if number > 0 && PAGE_SIZE_OPTIONS.contains(&size) =>
                {
                    Ok(Command::Page { number, size })
                }
                _ => Err(format!(
                    "Uso: /page N TAMAÑO (tamaños: {})",
                    PAGE_SIZE_OPTIONS.map(|size| size.to_string()).join(", ")
                )),
            }
        }
        "category" => Ok(Command::Category(
            (!args.is_empty()).then(|| args.to_string()),
        )),
        "new" if !args.is_empty() => Ok(Command::New(args.to_string())),
        "new" => Err("Uso: /new NOMBRE".to_string()),
        "refresh" => Ok(Command::Refresh),
        "quit" => Ok(Command::Quit),
        other => Err(format!("Comando desconocido: /{other}")),
    }
}

fn render(snapshot: &QuerySnapshot<NegocioRow>) {
    if snapshot.loading {
        println!("Cargando…");
        return;
    }
    if let Some(error) = &snapshot.error {
        println!("{error}");
    }
    if snapshot.is_empty() {
        println!("Sin resultados.");
        return;
    }

    for row in &snapshot.rows {
        println!("{:>4} | {}", row.id, row.cells().join(" | "));
    }

    let pages: Vec<String> = snapshot
        .pages()
        .into_iter()
        .map(|page| match page {
            Some(number) if number == snapshot.page_index + 1 => format!("[{number}]"),
            Some(number) => number.to_string(),
            None => "…".to_string(),
        })
        .collect();
    println!(
        "{} negocios · página {} de {} · {}",
        snapshot.total,
        snapshot.page_index + 1,
        snapshot.total_pages(),
        pages.join(" ")
    );
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match ConsoleConfig::load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading console config: {err}");
            process::exit(1);
        }
    };

    let repo = match HttpRepository::from_config(&config) {
        Ok(repo) => Arc::new(repo),
        Err(err) => {
            log::error!("Failed to build backend client: {err}");
            process::exit(1);
        }
    };
    log::info!("Using backend at {}", repo.base_url());

    let list = match negocio_list(Arc::clone(&repo), config.list_options()) {
        Ok(list) => list,
        Err(err) => {
            log::error!("Invalid list options: {err}");
            process::exit(1);
        }
    };

    let mut updates = list.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            render(&snapshot);
        }
    });

    let (bus, mut notices) = NoticeBus::channel();
    tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            println!("[{}] {}", notice.css_class(), notice.message);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                log::error!("Failed to read stdin: {err}");
                break;
            }
        };

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Search(term)) => list.set_search_term(term),
            Ok(Command::Page { number, size }) => {
                if let Err(err) = list.set_page(number - 1, size) {
                    bus.publish(Notice::error(err.to_string()));
                }
            }
            Ok(Command::Category(category)) => list.set_category(category),
            Ok(Command::New(nombre)) => {
                let form = NegocioForm {
                    nombre,
                    ..NegocioForm::default()
                };
                let result = save_negocio(&form, repo.as_ref()).await;
                if result.is_ok() {
                    list.refresh();
                }
                bus.report(&result);
            }
            Ok(Command::Refresh) => {
                list.refresh();
            }
            Err(usage) => {
                bus.publish(Notice::info(usage));
            }
        }
    }

    list.dispose();
}
