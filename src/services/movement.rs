use sea_orm::{ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::{require_movement, resolve_ref};
use super::validation::{non_empty, not_in_future, today};
use crate::db::entities::{artwork, country, movement};
use crate::db::repositories::{ArtworkRepository, MovementRepository};
use crate::dto::MovementPayload;
use crate::error::{AppError, Result};

pub struct MovementService {
    db: DatabaseConnection,
}

impl MovementService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: MovementPayload) -> Result<movement::Model> {
        info!("Starting artistic movement creation");
        let txn = self.db.begin().await?;

        let (name, origin_country_id) = checked_fields(&txn, &payload).await?;
        let movement = MovementRepository::new(&txn)
            .create(movement::ActiveModel {
                name: Set(name),
                image: Set(payload.image),
                description: Set(payload.description),
                peak_date: Set(payload.peak_date),
                origin_country_id: Set(origin_country_id),
                ..Default::default()
            })
            .await?;

        txn.commit().await?;
        info!("Finished artistic movement creation with id {}", movement.id);
        Ok(movement)
    }

    pub async fn get_all(&self) -> Result<Vec<movement::Model>> {
        info!("Starting lookup of all artistic movements");
        let movements = MovementRepository::new(&self.db).find_all().await?;
        info!("Finished lookup of {} artistic movements", movements.len());
        Ok(movements)
    }

    pub async fn get(&self, id: i32) -> Result<movement::Model> {
        info!("Starting lookup of artistic movement {}", id);
        let movement = require_movement(&self.db, id).await?;
        info!("Finished lookup of artistic movement {}", id);
        Ok(movement)
    }

    pub async fn update(&self, id: i32, payload: MovementPayload) -> Result<movement::Model> {
        info!("Starting update of artistic movement {}", id);
        let txn = self.db.begin().await?;
        let existing = require_movement(&txn, id).await?;

        let (name, origin_country_id) = checked_fields(&txn, &payload).await?;
        let mut active: movement::ActiveModel = existing.into();
        active.name = Set(name);
        active.image = Set(payload.image);
        active.description = Set(payload.description);
        active.peak_date = Set(payload.peak_date);
        if origin_country_id.is_some() {
            active.origin_country_id = Set(origin_country_id);
        }
        let movement = MovementRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of artistic movement {}", id);
        Ok(movement)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        info!("Starting deletion of artistic movement {}", id);
        let txn = self.db.begin().await?;
        require_movement(&txn, id).await?;

        let artworks = ArtworkRepository::new(&txn)
            .find_by_owner(artwork::Column::MovementId, id)
            .await?;
        if !artworks.is_empty() {
            return Err(AppError::illegal(
                "Unable to delete the artistic movement because it has associated artworks",
            ));
        }

        MovementRepository::new(&txn).delete_by_id(id).await?;
        txn.commit().await?;
        info!("Finished deletion of artistic movement {}", id);
        Ok(())
    }
}

async fn checked_fields<C: ConnectionTrait>(
    conn: &C,
    payload: &MovementPayload,
) -> Result<(String, Option<i32>)> {
    let name = non_empty(payload.name.clone(), "name")?;
    if let Some(peak) = payload.peak_date {
        not_in_future(peak, today(), "peak date")?;
    }
    let origin_country_id =
        resolve_ref::<country::Entity, _>(conn, payload.origin_country, "origin country").await?;
    Ok((name, origin_country_id))
}
