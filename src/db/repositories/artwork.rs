use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::db::entities::artwork;
use crate::error::Result;

pub struct ArtworkRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ArtworkRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artwork::Model>> {
        Ok(artwork::Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<artwork::Model>> {
        Ok(artwork::Entity::find()
            .order_by_asc(artwork::Column::Id)
            .all(self.conn)
            .await?)
    }

    /// Artworks whose `owner` column (artist, museum or movement) equals `owner_id`.
    pub async fn find_by_owner(
        &self,
        owner: artwork::Column,
        owner_id: i32,
    ) -> Result<Vec<artwork::Model>> {
        Ok(artwork::Entity::find()
            .filter(owner.eq(owner_id))
            .order_by_asc(artwork::Column::Id)
            .all(self.conn)
            .await?)
    }

    /// Point `owner` at `owner_id` for exactly `artwork_ids`, clearing it on
    /// every other artwork that previously pointed there.
    pub async fn reassign_owner(
        &self,
        owner: artwork::Column,
        owner_id: i32,
        artwork_ids: &[i32],
    ) -> Result<()> {
        artwork::Entity::update_many()
            .col_expr(owner, Expr::value(Option::<i32>::None))
            .filter(owner.eq(owner_id))
            .filter(artwork::Column::Id.is_not_in(artwork_ids.to_vec()))
            .exec(self.conn)
            .await?;

        if !artwork_ids.is_empty() {
            artwork::Entity::update_many()
                .col_expr(owner, Expr::value(owner_id))
                .filter(artwork::Column::Id.is_in(artwork_ids.to_vec()))
                .exec(self.conn)
                .await?;
        }

        Ok(())
    }

    pub async fn create(&self, artwork: artwork::ActiveModel) -> Result<artwork::Model> {
        Ok(artwork.insert(self.conn).await?)
    }

    pub async fn update(&self, artwork: artwork::ActiveModel) -> Result<artwork::Model> {
        Ok(artwork.update(self.conn).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        artwork::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(())
    }
}
