use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610160002_create_articles"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("articles"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("title")).string().not_null())
                    .col(ColumnDef::new(Alias::new("content")).text().not_null())
                    .col(ColumnDef::new(Alias::new("preview")).string().not_null())
                    .col(ColumnDef::new(Alias::new("price_cents")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("author_address")).string().not_null())
                    .col(ColumnDef::new(Alias::new("author_primary_network")).string().not_null())
                    .col(ColumnDef::new(Alias::new("publish_date")).timestamp().not_null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("views")).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("purchases")).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("earnings_cents")).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("read_time")).string().not_null())
                    .col(ColumnDef::new(Alias::new("categories")).json_binary().not_null())
                    .col(ColumnDef::new(Alias::new("likes")).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("popularity_score")).double().not_null().default(0.0))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("articles"), Alias::new("author_address"))
                            .to(Alias::new("authors"), Alias::new("address"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_articles_author_address")
                    .table(Alias::new("articles"))
                    .col(Alias::new("author_address"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("articles")).to_owned())
            .await
    }
}
