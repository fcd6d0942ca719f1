use sea_orm::{ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::require_country;
use super::validation::{non_empty, unique};
use crate::db::entities::country;
use crate::db::repositories::{
    ArtistRepository, CityRepository, CountryRepository, EmployeeRepository, MovementRepository,
    MuseumRepository,
};
use crate::dto::CountryPayload;
use crate::error::{AppError, Result};

pub struct CountryService {
    db: DatabaseConnection,
}

impl CountryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: CountryPayload) -> Result<country::Model> {
        info!("Starting country creation");
        let txn = self.db.begin().await?;
        let repo = CountryRepository::new(&txn);

        let (name, coordinates) = Self::checked_fields(&repo, &payload, None).await?;
        let country = repo
            .create(country::ActiveModel {
                name: Set(name),
                coordinates: Set(coordinates),
                image: Set(payload.image),
                ..Default::default()
            })
            .await?;

        txn.commit().await?;
        info!("Finished country creation with id {}", country.id);
        Ok(country)
    }

    pub async fn get_all(&self) -> Result<Vec<country::Model>> {
        info!("Starting lookup of all countries");
        let countries = CountryRepository::new(&self.db).find_all().await?;
        info!("Finished lookup of {} countries", countries.len());
        Ok(countries)
    }

    pub async fn get(&self, id: i32) -> Result<country::Model> {
        info!("Starting lookup of country {}", id);
        let country = require_country(&self.db, id).await?;
        info!("Finished lookup of country {}", id);
        Ok(country)
    }

    pub async fn update(&self, id: i32, payload: CountryPayload) -> Result<country::Model> {
        info!("Starting update of country {}", id);
        let txn = self.db.begin().await?;
        let existing = require_country(&txn, id).await?;
        let repo = CountryRepository::new(&txn);

        let (name, coordinates) = Self::checked_fields(&repo, &payload, Some(id)).await?;
        let mut active: country::ActiveModel = existing.into();
        active.name = Set(name);
        active.coordinates = Set(coordinates);
        active.image = Set(payload.image);
        let country = repo.update(active).await?;

        txn.commit().await?;
        info!("Finished update of country {}", id);
        Ok(country)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        info!("Starting deletion of country {}", id);
        let txn = self.db.begin().await?;
        require_country(&txn, id).await?;

        if !CityRepository::new(&txn).find_by_country(id).await?.is_empty() {
            return Err(AppError::illegal(
                "Unable to delete the country because it has associated cities",
            ));
        }
        if !MuseumRepository::new(&txn).find_by_country(id).await?.is_empty() {
            return Err(AppError::illegal(
                "Unable to delete the country because it has associated museums",
            ));
        }
        if !MovementRepository::new(&txn)
            .find_by_origin_country(id)
            .await?
            .is_empty()
        {
            return Err(AppError::illegal(
                "Unable to delete the country because it has associated artistic movements",
            ));
        }
        let artists = ArtistRepository::new(&txn);
        if !artists.find_by_birth_country(id).await?.is_empty()
            || !artists.find_by_death_country(id).await?.is_empty()
        {
            return Err(AppError::illegal(
                "Unable to delete the country because it has associated artists",
            ));
        }
        if !EmployeeRepository::new(&txn)
            .find_by_birth_country(id)
            .await?
            .is_empty()
        {
            return Err(AppError::illegal(
                "Unable to delete the country because it has associated employees",
            ));
        }

        CountryRepository::new(&txn).delete_by_id(id).await?;
        txn.commit().await?;
        info!("Finished deletion of country {}", id);
        Ok(())
    }

    async fn checked_fields<C: ConnectionTrait>(
        repo: &CountryRepository<'_, C>,
        payload: &CountryPayload,
        current: Option<i32>,
    ) -> Result<(String, String)> {
        let name = non_empty(payload.name.clone(), "name")?;
        let same_name = repo.find_by_name(&name).await?;
        unique(same_name.iter().map(|c| c.id), current, "name")?;

        let coordinates = non_empty(payload.coordinates.clone(), "coordinates")?;
        let same_coordinates = repo.find_by_coordinates(&coordinates).await?;
        unique(same_coordinates.iter().map(|c| c.id), current, "coordinates")?;

        Ok((name, coordinates))
    }
}
