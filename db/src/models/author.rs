use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, PaginatorTrait};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents an author in the `authors` table, keyed by wallet address.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    /// Wallet address (primary key).
    #[sea_orm(primary_key, auto_increment = false)]
    pub address: String,
    /// Network on which the author receives payouts.
    pub primary_payout_network: PayoutNetwork,
    /// Timestamp when the author was first registered.
    pub created_at: DateTime<Utc>,
    /// Lifetime earnings in USD cents.
    pub total_earnings_cents: i64,
    pub total_articles: i64,
    pub total_views: i64,
    pub total_purchases: i64,
}

/// Payment networks an author can be paid out on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PayoutNetwork {
    #[sea_orm(string_value = "base")]
    Base,

    #[sea_orm(string_value = "solana")]
    Solana,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::article::Entity")]
    Article,
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted by [`Model::create_or_update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub address: String,
    pub primary_payout_network: PayoutNetwork,
    pub created_at: DateTime<Utc>,
    pub total_earnings_cents: i64,
    pub total_articles: i64,
    pub total_views: i64,
    pub total_purchases: i64,
}

impl NewAuthor {
    /// An author with every counter at zero.
    pub fn fresh(
        address: impl Into<String>,
        primary_payout_network: PayoutNetwork,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            address: address.into(),
            primary_payout_network,
            created_at,
            total_earnings_cents: 0,
            total_articles: 0,
            total_views: 0,
            total_purchases: 0,
        }
    }
}

impl Model {
    /// Inserts the author, or merges into the existing row with the same address.
    ///
    /// On conflict only the payout network is refreshed. `created_at` and the
    /// counters of an existing author are left untouched, so repeated calls
    /// with identical input are idempotent.
    pub async fn create_or_update(db: &DbConn, author: NewAuthor) -> Result<Model, DbErr> {
        if author.address.trim().is_empty() {
            return Err(DbErr::Custom("author address cannot be empty".into()));
        }

        let address = author.address.clone();
        let active = ActiveModel {
            address: Set(author.address),
            primary_payout_network: Set(author.primary_payout_network),
            created_at: Set(author.created_at),
            total_earnings_cents: Set(author.total_earnings_cents),
            total_articles: Set(author.total_articles),
            total_views: Set(author.total_views),
            total_purchases: Set(author.total_purchases),
        };

        Entity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Address)
                    .update_column(Column::PrimaryPayoutNetwork)
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Self::find_by_address(db, &address)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Author {address} not found after upsert"))
            })
    }

    pub async fn find_by_address(db: &DbConn, address: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(address.to_owned()).one(db).await
    }

    pub async fn count(db: &DbConn) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }
}
