use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::db::entities::city;
use crate::error::Result;

pub struct CityRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CityRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<city::Model>> {
        Ok(city::Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<city::Model>> {
        Ok(city::Entity::find()
            .order_by_asc(city::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<city::Model>> {
        Ok(city::Entity::find()
            .filter(city::Column::Name.eq(name))
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_coordinates(&self, coordinates: &str) -> Result<Vec<city::Model>> {
        Ok(city::Entity::find()
            .filter(city::Column::Coordinates.eq(coordinates))
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_country(&self, country_id: i32) -> Result<Vec<city::Model>> {
        Ok(city::Entity::find()
            .filter(city::Column::CountryId.eq(country_id))
            .order_by_asc(city::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn create(&self, city: city::ActiveModel) -> Result<city::Model> {
        Ok(city.insert(self.conn).await?)
    }

    pub async fn update(&self, city: city::ActiveModel) -> Result<city::Model> {
        Ok(city.update(self.conn).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        city::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(())
    }
}
