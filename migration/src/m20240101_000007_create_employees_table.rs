use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_countries_table::Countries;
use super::m20240101_000004_create_museums_table::Museums;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string_len(500).not_null())
                    .col(ColumnDef::new(Employees::Image).text())
                    .col(ColumnDef::new(Employees::Address).string_len(500))
                    .col(ColumnDef::new(Employees::Neighborhood).string_len(255))
                    .col(ColumnDef::new(Employees::BirthDate).date())
                    .col(ColumnDef::new(Employees::BirthCountryId).integer())
                    .col(ColumnDef::new(Employees::MuseumId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_birth_country_id")
                            .from(Employees::Table, Employees::BirthCountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_museum_id")
                            .from(Employees::Table, Employees::MuseumId)
                            .to(Museums::Table, Museums::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_name")
                    .table(Employees::Table)
                    .col(Employees::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
    Name,
    Image,
    Address,
    Neighborhood,
    BirthDate,
    BirthCountryId,
    MuseumId,
}
