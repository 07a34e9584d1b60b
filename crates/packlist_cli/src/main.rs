//! Command-line front end for the packing list.
//!
//! # Responsibility
//! - Open the snapshot store and the item store for one invocation.
//! - Map a single user intent onto an item store call.
//! - Render the derived list and the progress footer.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use packlist_core::db::{open_db, open_db_in_memory};
use packlist_core::{
    default_log_level, init_logging, FilterMode, ItemId, PackingService, SnapshotStore, SortMode,
    SqliteSnapshotStore, QUANTITY_MAX, QUANTITY_MIN,
};
use std::path::PathBuf;

const DB_FILE_NAME: &str = "packlist.sqlite3";
const DB_PATH_ENV: &str = "PACKLIST_DB_PATH";

#[derive(Debug, Parser)]
#[command(name = "packlist", version, about = "Keep track of what still needs packing")]
struct Cli {
    /// SQLite file holding the list (defaults to $PACKLIST_DB_PATH or the temp dir).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Use a throwaway in-memory list.
    #[arg(long, global = true, conflicts_with = "db")]
    memory: bool,

    /// Absolute directory for rolling log files; logging stays off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// One of trace|debug|info|warn|error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Only show items whose description contains this text.
    #[arg(long, global = true, default_value = "")]
    search: String,

    /// all|packed|unpacked
    #[arg(long, global = true, default_value = "all")]
    filter: FilterMode,

    /// az|za|qty-high|qty-low|packed-first
    #[arg(long, global = true, default_value = "az")]
    sort: SortMode,

    /// Print the view, visible items and progress as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the list (default).
    List,
    /// Add an unpacked item.
    Add {
        description: String,
        #[arg(
            long,
            short,
            default_value_t = QUANTITY_MIN,
            value_parser = clap::value_parser!(u8).range(i64::from(QUANTITY_MIN)..=i64::from(QUANTITY_MAX))
        )]
        quantity: u8,
    },
    /// Remove an item.
    Delete { id: ItemId },
    /// Flip an item between packed and unpacked.
    Toggle { id: ItemId },
    /// Pack everything, or unpack everything when all items are packed.
    ToggleAll,
    /// Remove every packed item.
    ClearPacked,
    /// Empty the list.
    Reset,
    /// Print only the progress footer.
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        packlist_core::core_version()
    );

    let conn = if cli.memory {
        open_db_in_memory().context("failed to open in-memory list")?
    } else {
        let path = resolve_db_path(cli.db.clone());
        open_db(&path).with_context(|| format!("failed to open list at `{}`", path.display()))?
    };
    let store = SqliteSnapshotStore::try_new(&conn)?;
    run(&cli, store)
}

fn run<S: SnapshotStore>(cli: &Cli, store: S) -> Result<()> {
    let mut service = PackingService::open(store);
    service.set_search(cli.search.as_str());
    service.set_filter(cli.filter);
    service.set_sort(cli.sort);

    let default_command = Command::List;
    let command = cli.command.as_ref().unwrap_or(&default_command);
    if let Some(notice) = dispatch(&mut service, command) {
        println!("{notice}");
    }

    if cli.json {
        let json = render::render_json(&service).context("failed to encode list as JSON")?;
        println!("{json}");
    } else if matches!(command, Command::Stats) {
        println!("{}", service.stats());
    } else {
        print!("{}", render::render_list(&service));
    }
    Ok(())
}

/// Applies one intent; returns a notice for the user when it changed nothing.
fn dispatch<S: SnapshotStore>(
    service: &mut PackingService<S>,
    command: &Command,
) -> Option<String> {
    match command {
        Command::List | Command::Stats => None,
        Command::Add {
            description,
            quantity,
        } => match service.add(description, *quantity) {
            Some(_) => None,
            None => Some("Nothing added: the description is empty.".to_string()),
        },
        Command::Delete { id } => {
            (!service.delete(*id)).then(|| format!("No item with id {id}."))
        }
        Command::Toggle { id } => {
            (!service.toggle_packed(*id)).then(|| format!("No item with id {id}."))
        }
        Command::ToggleAll => {
            service.toggle_all_packed();
            None
        }
        Command::ClearPacked => match service.clear_packed() {
            0 => Some("No packed items to clear.".to_string()),
            _ => None,
        },
        Command::Reset => {
            service.reset();
            None
        }
    }
}

fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Ok(raw) = std::env::var(DB_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join(DB_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::{dispatch, resolve_db_path, Cli, Command};
    use clap::Parser;
    use packlist_core::{FilterMode, MemorySnapshotStore, PackingService, SortMode};
    use std::path::PathBuf;
    use uuid::Uuid;

    #[test]
    fn parses_view_flags_and_subcommand() {
        let cli = Cli::parse_from([
            "packlist",
            "--filter",
            "packed",
            "--sort",
            "qty-high",
            "add",
            "Socks",
            "-q",
            "3",
        ]);

        assert_eq!(cli.filter, FilterMode::Packed);
        assert_eq!(cli.sort, SortMode::QtyHigh);
        assert!(matches!(
            cli.command,
            Some(Command::Add { ref description, quantity: 3 }) if description == "Socks"
        ));
    }

    #[test]
    fn json_flag_is_global() {
        let cli = Cli::parse_from(["packlist", "stats", "--json"]);
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Command::Stats)));
        assert!(!Cli::parse_from(["packlist"]).json);
    }

    #[test]
    fn rejects_quantity_outside_offered_range() {
        assert!(Cli::try_parse_from(["packlist", "add", "Socks", "-q", "11"]).is_err());
        assert!(Cli::try_parse_from(["packlist", "--sort", "newest"]).is_err());
    }

    #[test]
    fn dispatch_reports_noops() {
        let mut service = PackingService::open(MemorySnapshotStore::new());

        let blank = Command::Add {
            description: "  ".to_string(),
            quantity: 1,
        };
        assert!(dispatch(&mut service, &blank).is_some());

        let missing = Command::Toggle { id: Uuid::new_v4() };
        assert!(dispatch(&mut service, &missing)
            .unwrap()
            .starts_with("No item with id"));

        assert!(dispatch(&mut service, &Command::ClearPacked).is_some());
        assert!(dispatch(&mut service, &Command::ToggleAll).is_none());
        assert!(dispatch(&mut service, &Command::ClearPacked).is_none());
        assert!(service.items().is_empty());
    }

    #[test]
    fn explicit_db_path_wins() {
        let path = PathBuf::from("/tmp/explicit.sqlite3");
        assert_eq!(resolve_db_path(Some(path.clone())), path);
    }
}
