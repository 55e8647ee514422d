//! `lazytodo` terminal front end.
//!
//! # Responsibility
//! - Resolve process configuration (flags with env fallbacks).
//! - Drive `TodoService` with one command per invocation, or an interactive
//!   shell that keeps the session (and its current page) alive.

mod render;
mod shell;

use clap::{Parser, Subcommand};
use lazytodo_core::db::open_db;
use lazytodo_core::{
    core_version, default_log_level, init_logging, ItemId, NullRenderer, PageSize, SortMode,
    SqliteKvStore, TodoService, TodoStore,
};
use log::info;
use render::TextRenderer;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "lazytodo", version, about = "Paged to-do list stored in SQLite")]
struct Cli {
    /// SQLite file holding the list and settings.
    #[arg(long, env = "LAZYTODO_DB", default_value = "lazytodo.sqlite3", global = true)]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "LAZYTODO_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "LAZYTODO_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Page to open before the command; add and page-size reset it to 1.
    #[arg(long, default_value_t = 1, global = true)]
    page: u32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the current page (default).
    List,
    /// Add a new item.
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Flip an item between open and done.
    Toggle { id: ItemId },
    /// Remove an item.
    Delete { id: ItemId },
    /// Change ordering: time, timeDesc or abc.
    Sort { mode: SortMode },
    /// Change items per page: 5, 10, 20, 30, 50, 100 or 500.
    PageSize { size: PageSize },
    /// Switch between light and dark theme.
    Theme,
    /// Read commands from stdin, keeping the session open.
    Shell,
    /// Print CLI and core versions.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("logging disabled: {err}");
        }
    }

    let command = cli.command.unwrap_or(Command::List);
    if let Command::Version = command {
        println!("lazytodo {}", env!("CARGO_PKG_VERSION"));
        println!("lazytodo_core {}", core_version());
        return ExitCode::SUCCESS;
    }

    let conn = match open_db(&cli.db) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open `{}`: {err}", cli.db.display());
            return ExitCode::FAILURE;
        }
    };
    info!("event=cli_start module=cli status=ok db={}", cli.db.display());

    let mut service = TodoService::new(TodoStore::new(SqliteKvStore::new(&conn)));
    let mut renderer = TextRenderer::new(io::stdout());
    if cli.page > 1 {
        service.change_page(cli.page, &mut NullRenderer);
    }

    match command {
        Command::List | Command::Version => {
            service.refresh(&mut renderer);
        }
        Command::Add { text } => {
            service.add(text.join(" "), &mut renderer);
        }
        Command::Toggle { id } => {
            service.toggle(id, &mut renderer);
        }
        Command::Delete { id } => {
            service.delete(id, &mut renderer);
        }
        Command::Sort { mode } => {
            service.change_sort(mode, &mut renderer);
        }
        Command::PageSize { size } => {
            service.change_page_size(size, &mut renderer);
        }
        Command::Theme => {
            service.toggle_theme(&mut renderer);
        }
        Command::Shell => {
            let stdin = io::stdin();
            if let Err(err) = shell::run(&mut service, stdin.lock(), &mut renderer) {
                eprintln!("shell aborted: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
