use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::db::entities::comment;
use crate::error::Result;

pub struct CommentRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<comment::Model>> {
        Ok(comment::Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<comment::Model>> {
        Ok(comment::Entity::find()
            .order_by_asc(comment::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_artwork(&self, artwork_id: i32) -> Result<Vec<comment::Model>> {
        Ok(comment::Entity::find()
            .filter(comment::Column::ArtworkId.eq(artwork_id))
            .order_by_asc(comment::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn create(&self, comment: comment::ActiveModel) -> Result<comment::Model> {
        Ok(comment.insert(self.conn).await?)
    }

    pub async fn update(&self, comment: comment::ActiveModel) -> Result<comment::Model> {
        Ok(comment.update(self.conn).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        comment::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(())
    }
}
