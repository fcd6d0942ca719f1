use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use super::lookup::{require_artist, require_artwork, require_movement, require_museum};
use super::owned_artworks::{owner_of, set_owner};
use crate::db::entities::{artist, artwork, movement, museum};
use crate::error::{messages, AppError, Result};

// Each artwork has at most one artist, one museum and one movement. The
// services below edit those references from the artwork's side.

pub struct ArtworkArtistService {
    db: DatabaseConnection,
}

impl ArtworkArtistService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_artist(&self, artwork_id: i32, artist_id: i32) -> Result<artist::Model> {
        info!("Starting assignment of artist {} to artwork {}", artist_id, artwork_id);
        let txn = self.db.begin().await?;
        let artwork = require_artwork(&txn, artwork_id).await?;
        let artist = require_artist(&txn, artist_id).await?;

        set_owner(&txn, artwork, artwork::Column::ArtistId, Some(artist_id)).await?;

        txn.commit().await?;
        info!("Finished assignment of artist {} to artwork {}", artist_id, artwork_id);
        Ok(artist)
    }

    pub async fn get_artist(&self, artwork_id: i32, artist_id: i32) -> Result<artist::Model> {
        info!("Starting lookup of artist {} of artwork {}", artist_id, artwork_id);
        let artwork = require_artwork(&self.db, artwork_id).await?;
        let artist = require_artist(&self.db, artist_id).await?;

        if owner_of(&artwork, artwork::Column::ArtistId) != Some(artist_id) {
            return Err(AppError::illegal(messages::ARTIST_ARTWORK_NOT_ASSOCIATED));
        }
        info!("Finished lookup of artist {} of artwork {}", artist_id, artwork_id);
        Ok(artist)
    }

    pub async fn remove_artist(&self, artwork_id: i32, artist_id: i32) -> Result<()> {
        info!("Starting removal of artist {} from artwork {}", artist_id, artwork_id);
        let txn = self.db.begin().await?;
        let artwork = require_artwork(&txn, artwork_id).await?;
        require_artist(&txn, artist_id).await?;

        if owner_of(&artwork, artwork::Column::ArtistId) == Some(artist_id) {
            set_owner(&txn, artwork, artwork::Column::ArtistId, None).await?;
        }

        txn.commit().await?;
        info!("Finished removal of artist {} from artwork {}", artist_id, artwork_id);
        Ok(())
    }
}

pub struct ArtworkMuseumService {
    db: DatabaseConnection,
}

impl ArtworkMuseumService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_museum(&self, artwork_id: i32, museum_id: i32) -> Result<museum::Model> {
        info!("Starting assignment of museum {} to artwork {}", museum_id, artwork_id);
        let txn = self.db.begin().await?;
        let artwork = require_artwork(&txn, artwork_id).await?;
        let museum = require_museum(&txn, museum_id).await?;

        set_owner(&txn, artwork, artwork::Column::MuseumId, Some(museum_id)).await?;

        txn.commit().await?;
        info!("Finished assignment of museum {} to artwork {}", museum_id, artwork_id);
        Ok(museum)
    }

    pub async fn get_museum(&self, artwork_id: i32, museum_id: i32) -> Result<museum::Model> {
        info!("Starting lookup of museum {} of artwork {}", museum_id, artwork_id);
        let artwork = require_artwork(&self.db, artwork_id).await?;
        let museum = require_museum(&self.db, museum_id).await?;

        if owner_of(&artwork, artwork::Column::MuseumId) != Some(museum_id) {
            return Err(AppError::illegal(messages::MUSEUM_ARTWORK_NOT_ASSOCIATED));
        }
        info!("Finished lookup of museum {} of artwork {}", museum_id, artwork_id);
        Ok(museum)
    }

    pub async fn remove_museum(&self, artwork_id: i32, museum_id: i32) -> Result<()> {
        info!("Starting removal of museum {} from artwork {}", museum_id, artwork_id);
        let txn = self.db.begin().await?;
        let artwork = require_artwork(&txn, artwork_id).await?;
        require_museum(&txn, museum_id).await?;

        if owner_of(&artwork, artwork::Column::MuseumId) == Some(museum_id) {
            set_owner(&txn, artwork, artwork::Column::MuseumId, None).await?;
        }

        txn.commit().await?;
        info!("Finished removal of museum {} from artwork {}", museum_id, artwork_id);
        Ok(())
    }
}

pub struct ArtworkMovementService {
    db: DatabaseConnection,
}

impl ArtworkMovementService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_movement(&self, artwork_id: i32, movement_id: i32) -> Result<movement::Model> {
        info!("Starting assignment of artistic movement {} to artwork {}", movement_id, artwork_id);
        let txn = self.db.begin().await?;
        let artwork = require_artwork(&txn, artwork_id).await?;
        let movement = require_movement(&txn, movement_id).await?;

        set_owner(&txn, artwork, artwork::Column::MovementId, Some(movement_id)).await?;

        txn.commit().await?;
        info!("Finished assignment of artistic movement {} to artwork {}", movement_id, artwork_id);
        Ok(movement)
    }

    pub async fn get_movement(&self, artwork_id: i32, movement_id: i32) -> Result<movement::Model> {
        info!("Starting lookup of artistic movement {} of artwork {}", movement_id, artwork_id);
        let artwork = require_artwork(&self.db, artwork_id).await?;
        let movement = require_movement(&self.db, movement_id).await?;

        if owner_of(&artwork, artwork::Column::MovementId) != Some(movement_id) {
            return Err(AppError::illegal(messages::MOVEMENT_ARTWORK_NOT_ASSOCIATED));
        }
        info!("Finished lookup of artistic movement {} of artwork {}", movement_id, artwork_id);
        Ok(movement)
    }

    pub async fn remove_movement(&self, artwork_id: i32, movement_id: i32) -> Result<()> {
        info!("Starting removal of artistic movement {} from artwork {}", movement_id, artwork_id);
        let txn = self.db.begin().await?;
        let artwork = require_artwork(&txn, artwork_id).await?;
        require_movement(&txn, movement_id).await?;

        if owner_of(&artwork, artwork::Column::MovementId) == Some(movement_id) {
            set_owner(&txn, artwork, artwork::Column::MovementId, None).await?;
        }

        txn.commit().await?;
        info!("Finished removal of artistic movement {} from artwork {}", movement_id, artwork_id);
        Ok(())
    }
}
