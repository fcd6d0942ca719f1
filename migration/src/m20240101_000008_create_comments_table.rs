use sea_orm_migration::prelude::*;

use super::m20240101_000006_create_artworks_table::Artworks;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comments::Rating).string_len(50).not_null())
                    .col(ColumnDef::new(Comments::Content).text())
                    .col(ColumnDef::new(Comments::PublicationDate).date())
                    .col(ColumnDef::new(Comments::ArtworkId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_artwork_id")
                            .from(Comments::Table, Comments::ArtworkId)
                            .to(Artworks::Table, Artworks::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_artwork_id")
                    .table(Comments::Table)
                    .col(Comments::ArtworkId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comments {
    Table,
    Id,
    Rating,
    Content,
    PublicationDate,
    ArtworkId,
}
