use sea_orm_migration::prelude::*;

use super::m20240101_000005_create_movements_table::Movements;
use super::m20240101_000004_create_museums_table::Museums;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovementMuseums::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MovementMuseums::MovementId).integer().not_null())
                    .col(ColumnDef::new(MovementMuseums::MuseumId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_movement_museums")
                            .col(MovementMuseums::MovementId)
                            .col(MovementMuseums::MuseumId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movement_museums_movement_id")
                            .from(MovementMuseums::Table, MovementMuseums::MovementId)
                            .to(Movements::Table, Movements::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movement_museums_museum_id")
                            .from(MovementMuseums::Table, MovementMuseums::MuseumId)
                            .to(Museums::Table, Museums::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movement_museums_museum_id")
                    .table(MovementMuseums::Table)
                    .col(MovementMuseums::MuseumId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovementMuseums::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MovementMuseums {
    Table,
    MovementId,
    MuseumId,
}
