use chrono::Utc;
use colored::*;
use db::models::{article, author};
use db::store::ContentStore;
use std::future::Future;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::catalog::{SeedConfig, seed_authors, validation_articles};
use crate::error::SeedError;
use crate::seeds;

const STATUS_COLUMN: usize = 80;

/// Rows touched by a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSummary {
    pub authors: Vec<author::Model>,
    pub articles: Vec<article::Model>,
}

/// `Seeding <name> ..... done (elapsed)`, or `failed` when `elapsed` is `None`.
fn status_line(name: &str, elapsed: Option<Duration>) -> String {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    let outcome = match elapsed {
        Some(elapsed) => format!("{} {}", "done".green(), format!("({elapsed:.2?})").dimmed()),
        None => "failed".red().to_string(),
    };
    format!("{base_msg}{dots} {outcome}")
}

/// Runs one stage, then prints its status line in one piece.
///
/// The line is written after the stage finishes so log output from inside
/// the stage cannot split it.
pub async fn run_stage<T, E, F>(name: &str, stage: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    log::debug!("seeding {name}");
    let start = Instant::now();
    let result = stage.await;

    let elapsed = result.as_ref().ok().map(|_| start.elapsed());
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", status_line(name, elapsed));
    let _ = stdout.flush();

    result
}

/// Seeds the validation authors and articles, then closes the store.
///
/// Any failure is logged once and returned. Rows written before the failure
/// are kept, and the store is closed on every path.
pub async fn populate<S>(store: S, config: &SeedConfig) -> Result<SeedSummary, SeedError>
where
    S: ContentStore,
{
    let result = seed_all(&store, config).await;

    match &result {
        Ok(summary) => {
            log::info!("x402 validation seed complete!");
            log::info!(
                "Ensured {} authors and {} articles exist.",
                summary.authors.len(),
                summary.articles.len()
            );
        }
        Err(err) => log::error!("Error populating database: {err}"),
    }

    if let Err(err) = store.close().await {
        log::warn!("Failed to close database connection: {err}");
    }

    result
}

async fn seed_all<S>(store: &S, config: &SeedConfig) -> Result<SeedSummary, SeedError>
where
    S: ContentStore,
{
    log::info!("Starting x402 validation seed...");

    store
        .wait_until_ready(&config.readiness)
        .await
        .map_err(SeedError::NotReady)?;

    let authors = seed_authors(config, Utc::now());
    let authors = run_stage("Authors", seeds::author::seed(store, &authors)).await?;

    let fixtures = validation_articles(config);
    let articles = run_stage("Articles", seeds::article::seed(store, &fixtures)).await?;

    Ok(SeedSummary { authors, articles })
}
