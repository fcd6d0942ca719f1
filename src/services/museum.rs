use sea_orm::{ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::{require_museum, require_ref};
use super::validation::{non_empty, unique};
use crate::db::entities::{artwork, country, museum};
use crate::db::repositories::{ArtworkRepository, EmployeeRepository, MuseumRepository};
use crate::dto::MuseumPayload;
use crate::error::{AppError, Result};

pub struct MuseumService {
    db: DatabaseConnection,
}

impl MuseumService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: MuseumPayload) -> Result<museum::Model> {
        info!("Starting museum creation");
        let txn = self.db.begin().await?;

        let (name, country_id) = checked_fields(&txn, &payload, None).await?;
        let museum = MuseumRepository::new(&txn)
            .create(museum::ActiveModel {
                name: Set(name),
                image: Set(payload.image),
                address: Set(payload.address),
                total_artworks: Set(payload.total_artworks),
                country_id: Set(Some(country_id)),
                ..Default::default()
            })
            .await?;

        txn.commit().await?;
        info!("Finished museum creation with id {}", museum.id);
        Ok(museum)
    }

    pub async fn get_all(&self) -> Result<Vec<museum::Model>> {
        info!("Starting lookup of all museums");
        let museums = MuseumRepository::new(&self.db).find_all().await?;
        info!("Finished lookup of {} museums", museums.len());
        Ok(museums)
    }

    pub async fn get(&self, id: i32) -> Result<museum::Model> {
        info!("Starting lookup of museum {}", id);
        let museum = require_museum(&self.db, id).await?;
        info!("Finished lookup of museum {}", id);
        Ok(museum)
    }

    pub async fn update(&self, id: i32, payload: MuseumPayload) -> Result<museum::Model> {
        info!("Starting update of museum {}", id);
        let txn = self.db.begin().await?;
        let existing = require_museum(&txn, id).await?;

        let (name, country_id) = checked_fields(&txn, &payload, Some(id)).await?;
        let mut active: museum::ActiveModel = existing.into();
        active.name = Set(name);
        active.image = Set(payload.image);
        active.address = Set(payload.address);
        active.total_artworks = Set(payload.total_artworks);
        active.country_id = Set(Some(country_id));
        let museum = MuseumRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of museum {}", id);
        Ok(museum)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        info!("Starting deletion of museum {}", id);
        let txn = self.db.begin().await?;
        require_museum(&txn, id).await?;

        let artworks = ArtworkRepository::new(&txn)
            .find_by_owner(artwork::Column::MuseumId, id)
            .await?;
        if !artworks.is_empty() {
            return Err(AppError::illegal(
                "Unable to delete the museum because it has associated artworks",
            ));
        }
        if !EmployeeRepository::new(&txn).find_by_museum(id).await?.is_empty() {
            return Err(AppError::illegal(
                "Unable to delete the museum because it has associated employees",
            ));
        }

        MuseumRepository::new(&txn).delete_by_id(id).await?;
        txn.commit().await?;
        info!("Finished deletion of museum {}", id);
        Ok(())
    }
}

async fn checked_fields<C: ConnectionTrait>(
    conn: &C,
    payload: &MuseumPayload,
    current: Option<i32>,
) -> Result<(String, i32)> {
    let name = non_empty(payload.name.clone(), "name")?;
    let same_name = MuseumRepository::new(conn).find_by_name(&name).await?;
    unique(same_name.iter().map(|m| m.id), current, "name")?;

    let country_id = require_ref::<country::Entity, _>(conn, payload.location, "location").await?;

    if payload.total_artworks.is_some_and(|total| total < 0) {
        return Err(AppError::illegal("The total artworks cannot be negative"));
    }

    Ok((name, country_id))
}
