use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::db::entities::employee;
use crate::error::Result;

pub struct EmployeeRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<employee::Model>> {
        Ok(employee::Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<employee::Model>> {
        Ok(employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<employee::Model>> {
        Ok(employee::Entity::find()
            .filter(employee::Column::Name.eq(name))
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_museum(&self, museum_id: i32) -> Result<Vec<employee::Model>> {
        Ok(employee::Entity::find()
            .filter(employee::Column::MuseumId.eq(museum_id))
            .order_by_asc(employee::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_birth_country(&self, country_id: i32) -> Result<Vec<employee::Model>> {
        Ok(employee::Entity::find()
            .filter(employee::Column::BirthCountryId.eq(country_id))
            .order_by_asc(employee::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn create(&self, employee: employee::ActiveModel) -> Result<employee::Model> {
        Ok(employee.insert(self.conn).await?)
    }

    pub async fn update(&self, employee: employee::ActiveModel) -> Result<employee::Model> {
        Ok(employee.update(self.conn).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        employee::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(())
    }
}
