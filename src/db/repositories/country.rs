use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::db::entities::country;
use crate::error::Result;

pub struct CountryRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CountryRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<country::Model>> {
        Ok(country::Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<country::Model>> {
        Ok(country::Entity::find()
            .order_by_asc(country::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<country::Model>> {
        Ok(country::Entity::find()
            .filter(country::Column::Name.eq(name))
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_coordinates(&self, coordinates: &str) -> Result<Vec<country::Model>> {
        Ok(country::Entity::find()
            .filter(country::Column::Coordinates.eq(coordinates))
            .all(self.conn)
            .await?)
    }

    pub async fn create(&self, country: country::ActiveModel) -> Result<country::Model> {
        Ok(country.insert(self.conn).await?)
    }

    pub async fn update(&self, country: country::ActiveModel) -> Result<country::Model> {
        Ok(country.update(self.conn).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        country::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(())
    }
}
