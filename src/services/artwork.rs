use sea_orm::{ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::{require_artwork, resolve_ref};
use super::validation::{non_empty, not_in_future, required_date, today};
use crate::db::entities::{artist, artwork, movement, museum};
use crate::db::repositories::{ArtworkRepository, CommentRepository};
use crate::dto::ArtworkPayload;
use crate::error::{AppError, Result};

pub struct ArtworkService {
    db: DatabaseConnection,
}

struct ArtworkFields {
    name: String,
    publication_date: chrono::NaiveDate,
    museum_id: Option<i32>,
    artist_id: Option<i32>,
    movement_id: Option<i32>,
}

impl ArtworkService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: ArtworkPayload) -> Result<artwork::Model> {
        info!("Starting artwork creation");
        let txn = self.db.begin().await?;

        let fields = checked_fields(&txn, &payload).await?;
        let artwork = ArtworkRepository::new(&txn)
            .create(artwork::ActiveModel {
                name: Set(fields.name),
                kind: Set(payload.kind),
                description: Set(payload.description),
                publication_date: Set(Some(fields.publication_date)),
                image: Set(payload.image),
                museum_id: Set(fields.museum_id),
                artist_id: Set(fields.artist_id),
                movement_id: Set(fields.movement_id),
                ..Default::default()
            })
            .await?;

        txn.commit().await?;
        info!("Finished artwork creation with id {}", artwork.id);
        Ok(artwork)
    }

    pub async fn get_all(&self) -> Result<Vec<artwork::Model>> {
        info!("Starting lookup of all artworks");
        let artworks = ArtworkRepository::new(&self.db).find_all().await?;
        info!("Finished lookup of {} artworks", artworks.len());
        Ok(artworks)
    }

    pub async fn get(&self, id: i32) -> Result<artwork::Model> {
        info!("Starting lookup of artwork {}", id);
        let artwork = require_artwork(&self.db, id).await?;
        info!("Finished lookup of artwork {}", id);
        Ok(artwork)
    }

    /// Replaces every field, references included: an absent reference
    /// detaches the artwork from that owner.
    pub async fn update(&self, id: i32, payload: ArtworkPayload) -> Result<artwork::Model> {
        info!("Starting update of artwork {}", id);
        let txn = self.db.begin().await?;
        let existing = require_artwork(&txn, id).await?;

        let fields = checked_fields(&txn, &payload).await?;
        let mut active: artwork::ActiveModel = existing.into();
        active.name = Set(fields.name);
        active.kind = Set(payload.kind);
        active.description = Set(payload.description);
        active.publication_date = Set(Some(fields.publication_date));
        active.image = Set(payload.image);
        active.museum_id = Set(fields.museum_id);
        active.artist_id = Set(fields.artist_id);
        active.movement_id = Set(fields.movement_id);
        let artwork = ArtworkRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of artwork {}", id);
        Ok(artwork)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        info!("Starting deletion of artwork {}", id);
        let txn = self.db.begin().await?;
        let artwork = require_artwork(&txn, id).await?;

        if artwork.movement_id.is_some() {
            return Err(AppError::illegal(
                "Unable to delete the artwork because it is associated to an artistic movement",
            ));
        }
        if artwork.museum_id.is_some() {
            return Err(AppError::illegal(
                "Unable to delete the artwork because it is associated to a museum",
            ));
        }
        if artwork.artist_id.is_some() {
            return Err(AppError::illegal(
                "Unable to delete the artwork because it is associated to an artist",
            ));
        }
        if !CommentRepository::new(&txn).find_by_artwork(id).await?.is_empty() {
            return Err(AppError::illegal(
                "Unable to delete the artwork because it has associated comments",
            ));
        }

        ArtworkRepository::new(&txn).delete_by_id(id).await?;
        txn.commit().await?;
        info!("Finished deletion of artwork {}", id);
        Ok(())
    }
}

async fn checked_fields<C: ConnectionTrait>(
    conn: &C,
    payload: &ArtworkPayload,
) -> Result<ArtworkFields> {
    let name = non_empty(payload.name.clone(), "name")?;
    let publication_date = required_date(payload.publication_date, "publication date")?;
    not_in_future(publication_date, today(), "publication date")?;

    Ok(ArtworkFields {
        name,
        publication_date,
        museum_id: resolve_ref::<museum::Entity, _>(conn, payload.museum, "museum").await?,
        artist_id: resolve_ref::<artist::Entity, _>(conn, payload.artist, "artist").await?,
        movement_id: resolve_ref::<movement::Entity, _>(conn, payload.movement, "artistic movement")
            .await?,
    })
}
