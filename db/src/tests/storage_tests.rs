//! Tests spanning both tables: foreign keys, relations, and connection URLs.

use chrono::Utc;
use sea_orm::{EntityTrait, ModelTrait};

use crate::database_url;
use crate::models::article::{self, NewArticle};
use crate::models::author::{self, NewAuthor};
use crate::models::{Author, PayoutNetwork};
use crate::test_utils::setup_test_db;

const EVM: &str = "0xEc115640B09416a59fE77e4e7b852fE700Fa6bF1";
const SOL: &str = "cAXdcMFHK6y9yTP7AMETzXC7zvTeDBbQ5f4nvSWDx51";

fn article_for(title: &str, author_address: &str, network: PayoutNetwork) -> NewArticle {
    let now = Utc::now();
    NewArticle {
        title: title.into(),
        content: "<p>x</p>".into(),
        preview: "x".into(),
        price_cents: 1,
        author_address: author_address.into(),
        author_primary_network: network,
        publish_date: now,
        created_at: now,
        updated_at: now,
        views: 0,
        purchases: 0,
        earnings_cents: 0,
        read_time: "1 min read".into(),
        categories: vec!["Validation".into()],
        likes: 0,
        popularity_score: 0.0,
    }
}

#[tokio::test]
async fn article_requires_existing_author() {
    let db = setup_test_db().await;

    let result = article::Model::create(&db, article_for("Orphan", EVM, PayoutNetwork::Base)).await;

    assert!(result.is_err());
    assert_eq!(article::Model::count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn author_relation_lists_only_their_articles() {
    let db = setup_test_db().await;
    author::Model::create_or_update(&db, NewAuthor::fresh(EVM, PayoutNetwork::Base, Utc::now()))
        .await
        .unwrap();
    author::Model::create_or_update(&db, NewAuthor::fresh(SOL, PayoutNetwork::Solana, Utc::now()))
        .await
        .unwrap();

    article::Model::create(&db, article_for("Base 1", EVM, PayoutNetwork::Base)).await.unwrap();
    article::Model::create(&db, article_for("Base 2", EVM, PayoutNetwork::Base)).await.unwrap();
    article::Model::create(&db, article_for("Sol 1", SOL, PayoutNetwork::Solana)).await.unwrap();

    let evm_author = Author::find_by_id(EVM.to_string()).one(&db).await.unwrap().unwrap();
    let related = evm_author.find_related(article::Entity).all(&db).await.unwrap();

    assert_eq!(related.len(), 2);
    assert!(related.iter().all(|a| a.author_address == EVM));
    assert_eq!(article::Model::find_by_author(&db, SOL).await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_author_cascades_to_articles() {
    let db = setup_test_db().await;
    author::Model::create_or_update(&db, NewAuthor::fresh(EVM, PayoutNetwork::Base, Utc::now()))
        .await
        .unwrap();
    article::Model::create(&db, article_for("Base 1", EVM, PayoutNetwork::Base)).await.unwrap();

    Author::delete_by_id(EVM.to_string()).exec(&db).await.unwrap();

    assert_eq!(article::Model::count(&db).await.unwrap(), 0);
}

#[test]
fn database_url_wraps_plain_paths() {
    assert_eq!(database_url("data/x402.db"), "sqlite://data/x402.db");
    assert_eq!(database_url("/tmp/x402.db"), "sqlite:///tmp/x402.db");
}

#[test]
fn database_url_keeps_dsns() {
    assert_eq!(database_url("sqlite::memory:"), "sqlite::memory:");
    assert_eq!(
        database_url("postgres://user@localhost/x402"),
        "postgres://user@localhost/x402"
    );
}
