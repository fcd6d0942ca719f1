use sea_orm::{DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::{
    require_artwork, require_city, require_comment, require_country, require_employee,
    require_museum,
};
use crate::db::entities::{city, comment, country, employee};
use crate::db::repositories::{CityRepository, CommentRepository, EmployeeRepository};
use crate::error::{messages, AppError, Result};

/// The country a city belongs to.
pub struct CityCountryService {
    db: DatabaseConnection,
}

impl CityCountryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_country(&self, city_id: i32, country_id: i32) -> Result<country::Model> {
        info!("Starting assignment of country {} to city {}", country_id, city_id);
        let txn = self.db.begin().await?;
        let city = require_city(&txn, city_id).await?;
        let country = require_country(&txn, country_id).await?;

        if city.country_id != Some(country_id) {
            let mut active: city::ActiveModel = city.into();
            active.country_id = Set(Some(country_id));
            CityRepository::new(&txn).update(active).await?;
        }

        txn.commit().await?;
        info!("Finished assignment of country {} to city {}", country_id, city_id);
        Ok(country)
    }

    pub async fn get_country(&self, city_id: i32, country_id: i32) -> Result<country::Model> {
        info!("Starting lookup of country {} of city {}", country_id, city_id);
        let city = require_city(&self.db, city_id).await?;
        let country = require_country(&self.db, country_id).await?;

        if city.country_id != Some(country_id) {
            return Err(AppError::illegal(messages::CITY_COUNTRY_NOT_ASSOCIATED));
        }
        info!("Finished lookup of country {} of city {}", country_id, city_id);
        Ok(country)
    }

    pub async fn remove_country(&self, city_id: i32, country_id: i32) -> Result<()> {
        info!("Starting removal of country {} from city {}", country_id, city_id);
        let txn = self.db.begin().await?;
        let city = require_city(&txn, city_id).await?;
        require_country(&txn, country_id).await?;

        if city.country_id == Some(country_id) {
            let mut active: city::ActiveModel = city.into();
            active.country_id = Set(None);
            CityRepository::new(&txn).update(active).await?;
        }

        txn.commit().await?;
        info!("Finished removal of country {} from city {}", country_id, city_id);
        Ok(())
    }
}

/// The museum an employee works at.
pub struct EmployeeMuseumService {
    db: DatabaseConnection,
}

impl EmployeeMuseumService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn replace_museum(
        &self,
        employee_id: i32,
        museum_id: i32,
    ) -> Result<employee::Model> {
        info!("Starting update of the museum of employee {}", employee_id);
        let txn = self.db.begin().await?;
        let employee = require_employee(&txn, employee_id).await?;
        require_museum(&txn, museum_id).await?;

        let mut active: employee::ActiveModel = employee.into();
        active.museum_id = Set(Some(museum_id));
        let employee = EmployeeRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of the museum of employee {}", employee_id);
        Ok(employee)
    }

    pub async fn remove_museum(&self, employee_id: i32) -> Result<()> {
        info!("Starting removal of the museum of employee {}", employee_id);
        let txn = self.db.begin().await?;
        let employee = require_employee(&txn, employee_id).await?;
        if employee.museum_id.is_none() {
            return Err(AppError::not_found(messages::EMPLOYEE_HAS_NO_MUSEUM));
        }

        let mut active: employee::ActiveModel = employee.into();
        active.museum_id = Set(None);
        EmployeeRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished removal of the museum of employee {}", employee_id);
        Ok(())
    }
}

/// The artwork a comment was written about.
pub struct CommentArtworkService {
    db: DatabaseConnection,
}

impl CommentArtworkService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn replace_artwork(
        &self,
        comment_id: i32,
        artwork_id: i32,
    ) -> Result<comment::Model> {
        info!("Starting update of the artwork of comment {}", comment_id);
        let txn = self.db.begin().await?;
        let comment = require_comment(&txn, comment_id).await?;
        require_artwork(&txn, artwork_id).await?;

        let mut active: comment::ActiveModel = comment.into();
        active.artwork_id = Set(Some(artwork_id));
        let comment = CommentRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of the artwork of comment {}", comment_id);
        Ok(comment)
    }

    pub async fn remove_artwork(&self, comment_id: i32) -> Result<()> {
        info!("Starting removal of the artwork of comment {}", comment_id);
        let txn = self.db.begin().await?;
        let comment = require_comment(&txn, comment_id).await?;
        if comment.artwork_id.is_none() {
            return Err(AppError::not_found(messages::COMMENT_HAS_NO_ARTWORK));
        }

        let mut active: comment::ActiveModel = comment.into();
        active.artwork_id = Set(None);
        CommentRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished removal of the artwork of comment {}", comment_id);
        Ok(())
    }
}
