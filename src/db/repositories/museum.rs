use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::db::entities::museum;
use crate::error::Result;

pub struct MuseumRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> MuseumRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<museum::Model>> {
        Ok(museum::Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<museum::Model>> {
        Ok(museum::Entity::find()
            .order_by_asc(museum::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<museum::Model>> {
        Ok(museum::Entity::find()
            .filter(museum::Column::Name.eq(name))
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_country(&self, country_id: i32) -> Result<Vec<museum::Model>> {
        Ok(museum::Entity::find()
            .filter(museum::Column::CountryId.eq(country_id))
            .order_by_asc(museum::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn create(&self, museum: museum::ActiveModel) -> Result<museum::Model> {
        Ok(museum.insert(self.conn).await?)
    }

    pub async fn update(&self, museum: museum::ActiveModel) -> Result<museum::Model> {
        Ok(museum.update(self.conn).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        museum::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(())
    }
}
