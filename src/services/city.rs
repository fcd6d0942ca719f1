use sea_orm::{ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::{require_city, resolve_ref};
use super::validation::{non_empty, unique};
use crate::db::entities::{city, country};
use crate::db::repositories::CityRepository;
use crate::dto::CityPayload;
use crate::error::Result;

pub struct CityService {
    db: DatabaseConnection,
}

struct CityFields {
    name: String,
    coordinates: String,
    country_id: Option<i32>,
}

impl CityService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: CityPayload) -> Result<city::Model> {
        info!("Starting city creation");
        let txn = self.db.begin().await?;

        let fields = checked_fields(&txn, &payload, None).await?;
        let city = CityRepository::new(&txn)
            .create(city::ActiveModel {
                name: Set(fields.name),
                coordinates: Set(fields.coordinates),
                image: Set(payload.image),
                country_id: Set(fields.country_id),
                ..Default::default()
            })
            .await?;

        txn.commit().await?;
        info!("Finished city creation with id {}", city.id);
        Ok(city)
    }

    pub async fn get_all(&self) -> Result<Vec<city::Model>> {
        info!("Starting lookup of all cities");
        let cities = CityRepository::new(&self.db).find_all().await?;
        info!("Finished lookup of {} cities", cities.len());
        Ok(cities)
    }

    pub async fn get(&self, id: i32) -> Result<city::Model> {
        info!("Starting lookup of city {}", id);
        let city = require_city(&self.db, id).await?;
        info!("Finished lookup of city {}", id);
        Ok(city)
    }

    pub async fn update(&self, id: i32, payload: CityPayload) -> Result<city::Model> {
        info!("Starting update of city {}", id);
        let txn = self.db.begin().await?;
        let existing = require_city(&txn, id).await?;

        let fields = checked_fields(&txn, &payload, Some(id)).await?;
        let mut active: city::ActiveModel = existing.into();
        active.name = Set(fields.name);
        active.coordinates = Set(fields.coordinates);
        active.image = Set(payload.image);
        if fields.country_id.is_some() {
            active.country_id = Set(fields.country_id);
        }
        let city = CityRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of city {}", id);
        Ok(city)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        info!("Starting deletion of city {}", id);
        let txn = self.db.begin().await?;
        require_city(&txn, id).await?;
        CityRepository::new(&txn).delete_by_id(id).await?;
        txn.commit().await?;
        info!("Finished deletion of city {}", id);
        Ok(())
    }
}

async fn checked_fields<C: ConnectionTrait>(
    conn: &C,
    payload: &CityPayload,
    current: Option<i32>,
) -> Result<CityFields> {
    let repo = CityRepository::new(conn);

    let name = non_empty(payload.name.clone(), "name")?;
    let coordinates = non_empty(payload.coordinates.clone(), "coordinates")?;
    let same_name = repo.find_by_name(&name).await?;
    unique(same_name.iter().map(|c| c.id), current, "name")?;
    let same_coordinates = repo.find_by_coordinates(&coordinates).await?;
    unique(same_coordinates.iter().map(|c| c.id), current, "coordinates")?;

    let country_id = resolve_ref::<country::Entity, _>(conn, payload.country, "country").await?;

    Ok(CityFields {
        name,
        coordinates,
        country_id,
    })
}
