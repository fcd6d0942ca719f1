use sea_orm_migration::prelude::*;

use super::m20240101_000003_create_artists_table::Artists;
use super::m20240101_000004_create_museums_table::Museums;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtistMuseums::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ArtistMuseums::ArtistId).integer().not_null())
                    .col(ColumnDef::new(ArtistMuseums::MuseumId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_artist_museums")
                            .col(ArtistMuseums::ArtistId)
                            .col(ArtistMuseums::MuseumId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_museums_artist_id")
                            .from(ArtistMuseums::Table, ArtistMuseums::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_museums_museum_id")
                            .from(ArtistMuseums::Table, ArtistMuseums::MuseumId)
                            .to(Museums::Table, Museums::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artist_museums_museum_id")
                    .table(ArtistMuseums::Table)
                    .col(ArtistMuseums::MuseumId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtistMuseums::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArtistMuseums {
    Table,
    ArtistId,
    MuseumId,
}
