use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, PaginatorTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use super::author::PayoutNetwork;

/// Represents an article in the `articles` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    /// Raw HTML body.
    pub content: String,
    /// Plain-text excerpt of `content`.
    pub preview: String,
    pub price_cents: i64,

    pub author_address: String,
    pub author_primary_network: PayoutNetwork,

    pub publish_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub views: i64,
    pub purchases: i64,
    pub earnings_cents: i64,
    pub read_time: String,
    /// JSON array of category names.
    #[sea_orm(column_type = "JsonBinary")]
    pub categories: serde_json::Value,
    pub likes: i64,
    pub popularity_score: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorAddress",
        to = "super::author::Column::Address",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted by [`Model::create`]. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub preview: String,
    pub price_cents: i64,
    pub author_address: String,
    pub author_primary_network: PayoutNetwork,
    pub publish_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub views: i64,
    pub purchases: i64,
    pub earnings_cents: i64,
    pub read_time: String,
    pub categories: Vec<String>,
    pub likes: i64,
    pub popularity_score: f64,
}

impl Model {
    /// Inserts a new article and returns it with its assigned id.
    ///
    /// Articles are never deduplicated; inserting the same title twice yields two rows.
    pub async fn create(db: &DbConn, article: NewArticle) -> Result<Model, DbErr> {
        if article.title.trim().is_empty() {
            return Err(DbErr::Custom("article title cannot be empty".into()));
        }
        if article.price_cents < 0 {
            return Err(DbErr::Custom(format!(
                "article price cannot be negative: {}",
                article.price_cents
            )));
        }

        let active = ActiveModel {
            title: Set(article.title),
            content: Set(article.content),
            preview: Set(article.preview),
            price_cents: Set(article.price_cents),
            author_address: Set(article.author_address),
            author_primary_network: Set(article.author_primary_network),
            publish_date: Set(article.publish_date),
            created_at: Set(article.created_at),
            updated_at: Set(article.updated_at),
            views: Set(article.views),
            purchases: Set(article.purchases),
            earnings_cents: Set(article.earnings_cents),
            read_time: Set(article.read_time),
            categories: Set(serde_json::json!(article.categories)),
            likes: Set(article.likes),
            popularity_score: Set(article.popularity_score),
            ..Default::default()
        };

        active.insert(db).await
    }

    pub async fn find_by_author(db: &DbConn, author_address: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::AuthorAddress.eq(author_address))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn count(db: &DbConn) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }

    /// Category names stored on the article. Non-string entries are skipped.
    pub fn category_list(&self) -> Vec<String> {
        self.categories
            .as_array()
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category_list().iter().any(|c| c == category)
    }
}
