use sea_orm_migration::prelude::*;

use super::m20240101_000003_create_artists_table::Artists;
use super::m20240101_000004_create_museums_table::Museums;
use super::m20240101_000005_create_movements_table::Movements;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artworks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artworks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artworks::Name).string_len(500).not_null())
                    .col(ColumnDef::new(Artworks::Kind).string_len(100))
                    .col(ColumnDef::new(Artworks::Description).text())
                    .col(ColumnDef::new(Artworks::PublicationDate).date())
                    .col(ColumnDef::new(Artworks::Image).text())
                    .col(ColumnDef::new(Artworks::MuseumId).integer())
                    .col(ColumnDef::new(Artworks::ArtistId).integer())
                    .col(ColumnDef::new(Artworks::MovementId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artworks_museum_id")
                            .from(Artworks::Table, Artworks::MuseumId)
                            .to(Museums::Table, Museums::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artworks_artist_id")
                            .from(Artworks::Table, Artworks::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artworks_movement_id")
                            .from(Artworks::Table, Artworks::MovementId)
                            .to(Movements::Table, Movements::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artworks_museum_id")
                    .table(Artworks::Table)
                    .col(Artworks::MuseumId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artworks_artist_id")
                    .table(Artworks::Table)
                    .col(Artworks::ArtistId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artworks_movement_id")
                    .table(Artworks::Table)
                    .col(Artworks::MovementId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artworks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Artworks {
    Table,
    Id,
    Name,
    Kind,
    Description,
    PublicationDate,
    Image,
    MuseumId,
    ArtistId,
    MovementId,
}
