//! Storage seam used by the seeder.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::models::article::{self, NewArticle};
use crate::models::author::{self, NewAuthor};
use crate::readiness::{RetryConfig, with_retry};

/// Author and article persistence for the seeding procedure.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Resolves once the store answers queries, or fails after the retry budget.
    async fn wait_until_ready(&self, retry: &RetryConfig) -> Result<(), DbErr>;

    /// Upsert keyed by wallet address.
    async fn create_or_update_author(&self, author: NewAuthor) -> Result<author::Model, DbErr>;

    /// Insert; the returned model carries the assigned id.
    async fn create_article(&self, article: NewArticle) -> Result<article::Model, DbErr>;

    /// Releases the underlying resources. Consumes the store.
    async fn close(self) -> Result<(), DbErr>
    where
        Self: Sized;
}

/// [`ContentStore`] backed by a SeaORM connection.
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl ContentStore for SeaOrmStore {
    async fn wait_until_ready(&self, retry: &RetryConfig) -> Result<(), DbErr> {
        let db = &self.db;
        with_retry(retry, "database ping", move || db.ping()).await
    }

    async fn create_or_update_author(&self, author: NewAuthor) -> Result<author::Model, DbErr> {
        author::Model::create_or_update(&self.db, author).await
    }

    async fn create_article(&self, article: NewArticle) -> Result<article::Model, DbErr> {
        article::Model::create(&self.db, article).await
    }

    async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }
}
