use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_countries_table::Countries;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Museums::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Museums::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Museums::Name).string_len(500).not_null())
                    .col(ColumnDef::new(Museums::Image).text())
                    .col(ColumnDef::new(Museums::Address).string_len(500))
                    .col(ColumnDef::new(Museums::TotalArtworks).integer())
                    .col(ColumnDef::new(Museums::CountryId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_museums_country_id")
                            .from(Museums::Table, Museums::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_museums_name")
                    .table(Museums::Table)
                    .col(Museums::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Museums::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Museums {
    Table,
    Id,
    Name,
    Image,
    Address,
    TotalArtworks,
    CountryId,
}
