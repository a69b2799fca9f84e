//! Fixed validation fixtures: the platform authors and the articles the
//! payment harness buys.

use chrono::{DateTime, Duration, Utc};
use db::models::PayoutNetwork;
use db::models::author::NewAuthor;
use db::readiness::RetryConfig;
use util::config::{AppConfig, DEFAULT_PLATFORM_EVM_ADDRESS, DEFAULT_PLATFORM_SOL_ADDRESS};

/// Every validation article costs $0.01.
pub const VALIDATION_PRICE_CENTS: i64 = 1;

pub const VALIDATION_CATEGORY: &str = "Validation";

/// Inputs of a seeding run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    pub platform_evm_address: String,
    pub platform_sol_address: String,
    /// Backoff used while waiting for the database.
    pub readiness: RetryConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            platform_evm_address: DEFAULT_PLATFORM_EVM_ADDRESS.to_string(),
            platform_sol_address: DEFAULT_PLATFORM_SOL_ADDRESS.to_string(),
            readiness: RetryConfig::default(),
        }
    }
}

impl SeedConfig {
    pub fn from_app_config(cfg: &AppConfig) -> Self {
        Self {
            platform_evm_address: cfg.platform_evm_address.clone(),
            platform_sol_address: cfg.platform_sol_address.clone(),
            readiness: RetryConfig {
                max_retries: cfg.db_ready_max_retries,
                base_delay_ms: cfg.db_ready_base_delay_ms,
                ..RetryConfig::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAuthor {
    pub address: String,
    pub network: PayoutNetwork,
    pub created_at: DateTime<Utc>,
}

impl SeedAuthor {
    pub fn to_new_author(&self) -> NewAuthor {
        NewAuthor::fresh(self.address.clone(), self.network, self.created_at)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFixture {
    pub title: &'static str,
    pub content: &'static str,
    pub author_address: String,
    pub author_primary_network: PayoutNetwork,
}

/// Platform authors, oldest first. Ages are relative to `now`.
pub fn seed_authors(config: &SeedConfig, now: DateTime<Utc>) -> Vec<SeedAuthor> {
    vec![
        SeedAuthor {
            address: config.platform_evm_address.clone(),
            network: PayoutNetwork::Base,
            created_at: now - Duration::days(2),
        },
        SeedAuthor {
            address: config.platform_sol_address.clone(),
            network: PayoutNetwork::Solana,
            created_at: now - Duration::days(1),
        },
    ]
}

/// The articles the harness purchases, in creation order.
///
/// The first two share the Base author so one wallet can buy two distinct
/// articles from the same author.
pub fn validation_articles(config: &SeedConfig) -> Vec<ArticleFixture> {
    vec![
        ArticleFixture {
            title: "x402 Harness: Base Mainnet Purchase",
            content: "<p>Use this article to validate Base mainnet purchases via the Coinbase x402 facilitator.</p><p>It is pinned to the platform Base wallet and costs exactly $0.01.</p>",
            author_address: config.platform_evm_address.clone(),
            author_primary_network: PayoutNetwork::Base,
        },
        ArticleFixture {
            title: "x402 Harness: Base Regression Article",
            content: "<p>Second Base article for regression testing. Keeping a sibling entry ensures we can purchase twice without violating 1 purchase per wallet per article rule.</p><p>Also priced at $0.01.</p>",
            author_address: config.platform_evm_address.clone(),
            author_primary_network: PayoutNetwork::Base,
        },
        ArticleFixture {
            title: "x402 Harness: Solana Validation Article",
            content: "<p>This article is tied to the Solana payout address so the harness can walk through SPL USDC purchases.</p><p>It mirrors the Base price ($0.01) for consistency across networks.</p>",
            author_address: config.platform_sol_address.clone(),
            author_primary_network: PayoutNetwork::Solana,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serial_test::serial;
    use std::collections::HashSet;

    #[test]
    fn default_config_uses_platform_literals() {
        let config = SeedConfig::default();
        assert_eq!(config.platform_evm_address, DEFAULT_PLATFORM_EVM_ADDRESS);
        assert_eq!(config.platform_sol_address, DEFAULT_PLATFORM_SOL_ADDRESS);
    }

    #[test]
    #[serial]
    fn env_override_reaches_seed_config() {
        unsafe {
            std::env::set_var("X402_PLATFORM_EVM_ADDRESS", "0xABCDEF0000000000000000000000000000001234");
            std::env::set_var("DB_READY_MAX_RETRIES", "2");
        }

        let config = SeedConfig::from_app_config(&AppConfig::from_env());

        unsafe {
            std::env::remove_var("X402_PLATFORM_EVM_ADDRESS");
            std::env::remove_var("DB_READY_MAX_RETRIES");
        }

        assert_eq!(config.platform_evm_address, "0xABCDEF0000000000000000000000000000001234");
        assert_eq!(config.platform_sol_address, DEFAULT_PLATFORM_SOL_ADDRESS);
        assert_eq!(config.readiness.max_retries, 2);
    }

    #[test]
    fn authors_are_ordered_by_age() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();
        let authors = seed_authors(&SeedConfig::default(), now);

        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0].network, PayoutNetwork::Base);
        assert_eq!(authors[0].created_at, Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap());
        assert_eq!(authors[1].network, PayoutNetwork::Solana);
        assert_eq!(authors[1].created_at, Utc.with_ymd_and_hms(2026, 10, 15, 9, 0, 0).unwrap());
        assert!(authors[0].created_at < authors[1].created_at);
    }

    #[test]
    fn seed_author_starts_with_zeroed_counters() {
        let now = Utc::now();
        let author = seed_authors(&SeedConfig::default(), now)[0].to_new_author();

        assert_eq!(author.total_earnings_cents, 0);
        assert_eq!(author.total_articles, 0);
        assert_eq!(author.total_views, 0);
        assert_eq!(author.total_purchases, 0);
    }

    #[test]
    fn articles_bind_to_seed_authors() {
        let config = SeedConfig::default();
        let articles = validation_articles(&config);

        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].author_address, config.platform_evm_address);
        assert_eq!(articles[1].author_address, config.platform_evm_address);
        assert_eq!(articles[2].author_address, config.platform_sol_address);
        assert_eq!(articles[2].author_primary_network, PayoutNetwork::Solana);

        let titles: HashSet<_> = articles.iter().map(|a| a.title).collect();
        assert_eq!(titles.len(), 3);
    }

    #[test]
    fn every_article_author_is_seeded() {
        let config = SeedConfig::default();
        let authors: HashSet<_> = seed_authors(&config, Utc::now())
            .into_iter()
            .map(|a| (a.address, a.network))
            .collect();

        for article in validation_articles(&config) {
            let owner = (article.author_address.clone(), article.author_primary_network);
            assert!(authors.contains(&owner));
        }
    }
}
