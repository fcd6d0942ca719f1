use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::db::entities::movement;
use crate::error::Result;

pub struct MovementRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> MovementRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<movement::Model>> {
        Ok(movement::Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<movement::Model>> {
        Ok(movement::Entity::find()
            .order_by_asc(movement::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_origin_country(&self, country_id: i32) -> Result<Vec<movement::Model>> {
        Ok(movement::Entity::find()
            .filter(movement::Column::OriginCountryId.eq(country_id))
            .order_by_asc(movement::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn create(&self, movement: movement::ActiveModel) -> Result<movement::Model> {
        Ok(movement.insert(self.conn).await?)
    }

    pub async fn update(&self, movement: movement::ActiveModel) -> Result<movement::Model> {
        Ok(movement.update(self.conn).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        movement::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(())
    }
}
