use sea_orm_migration::prelude::*;

use super::m20240101_000003_create_artists_table::Artists;
use super::m20240101_000005_create_movements_table::Movements;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtistMovements::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ArtistMovements::ArtistId).integer().not_null())
                    .col(ColumnDef::new(ArtistMovements::MovementId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_artist_movements")
                            .col(ArtistMovements::ArtistId)
                            .col(ArtistMovements::MovementId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_movements_artist_id")
                            .from(ArtistMovements::Table, ArtistMovements::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_movements_movement_id")
                            .from(ArtistMovements::Table, ArtistMovements::MovementId)
                            .to(Movements::Table, Movements::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artist_movements_movement_id")
                    .table(ArtistMovements::Table)
                    .col(ArtistMovements::MovementId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtistMovements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArtistMovements {
    Table,
    ArtistId,
    MovementId,
}
