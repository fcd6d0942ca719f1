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
                    .table(Artists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artists::Name).string_len(500).not_null())
                    .col(ColumnDef::new(Artists::Image).text())
                    .col(ColumnDef::new(Artists::BirthDate).date())
                    .col(ColumnDef::new(Artists::DeathDate).date())
                    .col(ColumnDef::new(Artists::BirthCountryId).integer())
                    .col(ColumnDef::new(Artists::DeathCountryId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artists_birth_country_id")
                            .from(Artists::Table, Artists::BirthCountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artists_death_country_id")
                            .from(Artists::Table, Artists::DeathCountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artists_name")
                    .table(Artists::Table)
                    .col(Artists::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Artists {
    Table,
    Id,
    Name,
    Image,
    BirthDate,
    DeathDate,
    BirthCountryId,
    DeathCountryId,
}
