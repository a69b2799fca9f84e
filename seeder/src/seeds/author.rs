use db::models::author;
use db::store::ContentStore;
use util::content::format_address;

use crate::catalog::SeedAuthor;
use crate::error::SeedError;

/// Upserts every seed author, one at a time, in catalog order.
pub async fn seed<S>(store: &S, authors: &[SeedAuthor]) -> Result<Vec<author::Model>, SeedError>
where
    S: ContentStore + ?Sized,
{
    log::info!("Ensuring platform authors exist...");

    let mut seeded = Vec::with_capacity(authors.len());
    for author in authors {
        let model = store
            .create_or_update_author(author.to_new_author())
            .await
            .map_err(|source| SeedError::Author {
                address: author.address.clone(),
                source,
            })?;

        log::info!("  -> {} ({})", format_address(&model.address), model.primary_payout_network);
        seeded.push(model);
    }

    Ok(seeded)
}
