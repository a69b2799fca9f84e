//! Applies pending migrations one at a time with a status line for each.

use colored::*;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use crate::Migrator;

const STATUS_COLUMN: usize = 80;

/// What the `migration` binary was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply pending migrations to the existing file.
    Up,
    /// Delete the database file, then migrate from scratch.
    Fresh,
    /// Delete the database file only.
    Clean,
}

impl Command {
    pub fn parse(arg: Option<&str>) -> Result<Self, String> {
        match arg {
            None | Some("up") => Ok(Command::Up),
            Some("fresh") => Ok(Command::Fresh),
            Some("clean") => Ok(Command::Clean),
            Some(other) => Err(format!(
                "unknown command `{other}` (expected up, fresh or clean)"
            )),
        }
    }
}

/// Runs `command` against the SQLite file at `db_path`.
///
/// Returns the number of migrations applied.
pub async fn run(command: Command, db_path: &str) -> Result<usize, DbErr> {
    if matches!(command, Command::Fresh | Command::Clean) {
        remove_db_file(db_path)?;
    }
    if command == Command::Clean {
        return Ok(0);
    }

    if let Some(parent) = Path::new(db_path).parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let db = Database::connect(format!("sqlite://{db_path}?mode=rwc")).await?;
    let applied = run_all_migrations(&db).await;
    db.close().await?;
    applied
}

/// Applies every pending migration in order, stopping at the first failure.
pub async fn run_all_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        println!("Schema is up to date.");
        return Ok(0);
    }

    println!("Running {} migrations...", pending.len());
    for migration in &pending {
        let start = Instant::now();
        let result = Migrator::up(db, Some(1)).await;
        let elapsed = result.as_ref().ok().map(|_| start.elapsed());

        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", status_line(migration.name(), elapsed));
        let _ = stdout.flush();

        result?;
    }

    Ok(pending.len())
}

fn status_line(name: &str, elapsed: Option<std::time::Duration>) -> String {
    let name_str = format!("Applying {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    match elapsed {
        Some(elapsed) => {
            let time_str = format!("({elapsed:.2?})").dimmed();
            format!("{name_str}{dots} {} {time_str}", "done".green())
        }
        None => format!("{name_str}{dots} {}", "failed".red()),
    }
}

fn remove_db_file(path: &str) -> Result<(), DbErr> {
    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path).map_err(|e| io_error(db_path, e))?;
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
    Ok(())
}

fn io_error(path: &Path, err: io::Error) -> DbErr {
    DbErr::Custom(format!("{}: {err}", path.display()))
}
