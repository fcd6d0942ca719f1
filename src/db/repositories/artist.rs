use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::db::entities::artist;
use crate::error::Result;

pub struct ArtistRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ArtistRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .filter(artist::Column::Name.eq(name))
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_birth_country(&self, country_id: i32) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .filter(artist::Column::BirthCountryId.eq(country_id))
            .order_by_asc(artist::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_death_country(&self, country_id: i32) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .filter(artist::Column::DeathCountryId.eq(country_id))
            .order_by_asc(artist::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn create(&self, artist: artist::ActiveModel) -> Result<artist::Model> {
        Ok(artist.insert(self.conn).await?)
    }

    pub async fn update(&self, artist: artist::ActiveModel) -> Result<artist::Model> {
        Ok(artist.update(self.conn).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        artist::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(())
    }
}
