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
                    .table(Movements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movements::Name).string_len(500).not_null())
                    .col(ColumnDef::new(Movements::Image).text())
                    .col(ColumnDef::new(Movements::Description).text())
                    .col(ColumnDef::new(Movements::PeakDate).date())
                    .col(ColumnDef::new(Movements::OriginCountryId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movements_origin_country_id")
                            .from(Movements::Table, Movements::OriginCountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Movements {
    Table,
    Id,
    Name,
    Image,
    Description,
    PeakDate,
    OriginCountryId,
}
