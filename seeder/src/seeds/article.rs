use chrono::{DateTime, Utc};
use db::models::article::{self, NewArticle};
use db::store::ContentStore;
use util::content::{calculate_read_time, format_usd, generate_preview};

use crate::catalog::{ArticleFixture, VALIDATION_CATEGORY, VALIDATION_PRICE_CENTS};
use crate::error::SeedError;

/// Expands a fixture into a full article with derived fields and zeroed counters.
pub fn build_article(fixture: &ArticleFixture, timestamp: DateTime<Utc>) -> NewArticle {
    NewArticle {
        title: fixture.title.to_string(),
        content: fixture.content.to_string(),
        preview: generate_preview(fixture.content),
        price_cents: VALIDATION_PRICE_CENTS,
        author_address: fixture.author_address.clone(),
        author_primary_network: fixture.author_primary_network,
        publish_date: timestamp,
        created_at: timestamp,
        updated_at: timestamp,
        views: 0,
        purchases: 0,
        earnings_cents: 0,
        read_time: calculate_read_time(fixture.content),
        categories: vec![VALIDATION_CATEGORY.to_string()],
        likes: 0,
        popularity_score: 0.0,
    }
}

/// Creates each fixture in order. Stops at the first failure; earlier rows stay.
pub async fn seed<S>(
    store: &S,
    fixtures: &[ArticleFixture],
) -> Result<Vec<article::Model>, SeedError>
where
    S: ContentStore + ?Sized,
{
    log::info!("Creating fixed validation articles...");

    let mut created = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        let model = store
            .create_article(build_article(fixture, Utc::now()))
            .await
            .map_err(|source| SeedError::Article {
                title: fixture.title.to_string(),
                source,
            })?;

        log::info!(
            "Article \"{}\" created (ID {}) for {} at {}",
            model.title,
            model.id,
            model.author_primary_network.to_string().to_uppercase(),
            format_usd(model.price_cents)
        );
        created.push(model);
    }

    Ok(created)
}
