use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610160001_create_authors"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("authors"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("address")).string().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("primary_payout_network")).string().not_null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("total_earnings_cents")).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("total_articles")).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("total_views")).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("total_purchases")).big_integer().not_null().default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("authors")).to_owned())
            .await
    }
}
