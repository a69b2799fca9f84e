use sea_orm::DbErr;
use thiserror::Error;

/// Any failure that aborts a seeding run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database not ready: {0}")]
    NotReady(#[source] DbErr),

    #[error("failed to upsert author {address}: {source}")]
    Author { address: String, source: DbErr },

    #[error("failed to create article \"{title}\": {source}")]
    Article { title: String, source: DbErr },
}
