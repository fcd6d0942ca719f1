use sea_orm::{DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::{
    require_artist, require_artwork, require_country, require_movement, require_museum,
};
use super::owned_artworks::{owner_of, set_owner};
use crate::db::entities::{artist, artwork, movement, museum};
use crate::db::repositories::{
    ArtistMovementLinks, ArtworkRepository, MovementMuseumLinks, MovementRepository,
};
use crate::error::{messages, AppError, Result};

/// Artists of an artistic movement; the inverse side of [`super::ArtistMovementService`].
pub struct MovementArtistService {
    db: DatabaseConnection,
}

impl MovementArtistService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_artist(&self, movement_id: i32, artist_id: i32) -> Result<artist::Model> {
        info!("Starting association of artist {} to artistic movement {}", artist_id, movement_id);
        let txn = self.db.begin().await?;
        require_movement(&txn, movement_id).await?;
        let artist = require_artist(&txn, artist_id).await?;

        ArtistMovementLinks::new(&txn).link(artist_id, movement_id).await?;

        txn.commit().await?;
        info!("Finished association of artist {} to artistic movement {}", artist_id, movement_id);
        Ok(artist)
    }

    pub async fn get_artists(&self, movement_id: i32) -> Result<Vec<artist::Model>> {
        info!("Starting lookup of the artists of artistic movement {}", movement_id);
        let movement = require_movement(&self.db, movement_id).await?;
        let artists = ArtistMovementLinks::new(&self.db).artists_of(&movement).await?;
        info!("Finished lookup of the artists of artistic movement {}", movement_id);
        Ok(artists)
    }

    pub async fn get_artist(&self, movement_id: i32, artist_id: i32) -> Result<artist::Model> {
        info!("Starting lookup of artist {} of artistic movement {}", artist_id, movement_id);
        require_movement(&self.db, movement_id).await?;
        let artist = require_artist(&self.db, artist_id).await?;

        if !ArtistMovementLinks::new(&self.db)
            .exists(artist_id, movement_id)
            .await?
        {
            return Err(AppError::illegal(messages::ARTIST_MOVEMENT_NOT_ASSOCIATED));
        }
        info!("Finished lookup of artist {} of artistic movement {}", artist_id, movement_id);
        Ok(artist)
    }

    pub async fn replace_artists(
        &self,
        movement_id: i32,
        artist_ids: &[i32],
    ) -> Result<Vec<artist::Model>> {
        info!("Starting replacement of the artists of artistic movement {}", movement_id);
        let txn = self.db.begin().await?;
        let movement = require_movement(&txn, movement_id).await?;
        for &artist_id in artist_ids {
            require_artist(&txn, artist_id).await?;
        }

        let links = ArtistMovementLinks::new(&txn);
        links.replace_artists(movement_id, artist_ids).await?;
        let artists = links.artists_of(&movement).await?;

        txn.commit().await?;
        info!("Finished replacement of the artists of artistic movement {}", movement_id);
        Ok(artists)
    }

    pub async fn remove_artist(&self, movement_id: i32, artist_id: i32) -> Result<()> {
        info!("Starting removal of artist {} from artistic movement {}", artist_id, movement_id);
        let txn = self.db.begin().await?;
        require_movement(&txn, movement_id).await?;
        require_artist(&txn, artist_id).await?;

        ArtistMovementLinks::new(&txn)
            .unlink(artist_id, movement_id)
            .await?;

        txn.commit().await?;
        info!("Finished removal of artist {} from artistic movement {}", artist_id, movement_id);
        Ok(())
    }
}

/// Museums exhibiting an artistic movement.
pub struct MovementMuseumService {
    db: DatabaseConnection,
}

impl MovementMuseumService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_museum(&self, movement_id: i32, museum_id: i32) -> Result<museum::Model> {
        info!("Starting association of museum {} to artistic movement {}", museum_id, movement_id);
        let txn = self.db.begin().await?;
        require_movement(&txn, movement_id).await?;
        let museum = require_museum(&txn, museum_id).await?;

        MovementMuseumLinks::new(&txn).link(movement_id, museum_id).await?;

        txn.commit().await?;
        info!("Finished association of museum {} to artistic movement {}", museum_id, movement_id);
        Ok(museum)
    }

    pub async fn get_museums(&self, movement_id: i32) -> Result<Vec<museum::Model>> {
        info!("Starting lookup of the museums of artistic movement {}", movement_id);
        let movement = require_movement(&self.db, movement_id).await?;
        let museums = MovementMuseumLinks::new(&self.db).museums_of(&movement).await?;
        info!("Finished lookup of the museums of artistic movement {}", movement_id);
        Ok(museums)
    }

    pub async fn get_museum(&self, movement_id: i32, museum_id: i32) -> Result<museum::Model> {
        info!("Starting lookup of museum {} of artistic movement {}", museum_id, movement_id);
        require_movement(&self.db, movement_id).await?;
        let museum = require_museum(&self.db, museum_id).await?;

        if !MovementMuseumLinks::new(&self.db)
            .exists(movement_id, museum_id)
            .await?
        {
            return Err(AppError::illegal(messages::MUSEUM_MOVEMENT_NOT_ASSOCIATED));
        }
        info!("Finished lookup of museum {} of artistic movement {}", museum_id, movement_id);
        Ok(museum)
    }

    pub async fn replace_museums(
        &self,
        movement_id: i32,
        museum_ids: &[i32],
    ) -> Result<Vec<museum::Model>> {
        info!("Starting replacement of the museums of artistic movement {}", movement_id);
        let txn = self.db.begin().await?;
        let movement = require_movement(&txn, movement_id).await?;
        for &museum_id in museum_ids {
            require_museum(&txn, museum_id).await?;
        }

        let links = MovementMuseumLinks::new(&txn);
        links.replace_museums(movement_id, museum_ids).await?;
        let museums = links.museums_of(&movement).await?;

        txn.commit().await?;
        info!("Finished replacement of the museums of artistic movement {}", movement_id);
        Ok(museums)
    }

    pub async fn remove_museum(&self, movement_id: i32, museum_id: i32) -> Result<()> {
        info!("Starting removal of museum {} from artistic movement {}", museum_id, movement_id);
        let txn = self.db.begin().await?;
        require_movement(&txn, movement_id).await?;
        require_museum(&txn, museum_id).await?;

        MovementMuseumLinks::new(&txn)
            .unlink(movement_id, museum_id)
            .await?;

        txn.commit().await?;
        info!("Finished removal of museum {} from artistic movement {}", museum_id, movement_id);
        Ok(())
    }
}

/// Artworks of an artistic movement, tracked through `artworks.movement_id`.
pub struct MovementArtworkService {
    db: DatabaseConnection,
}

impl MovementArtworkService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_artwork(&self, movement_id: i32, artwork_id: i32) -> Result<artwork::Model> {
        info!(
            "Starting association of artwork {} to artistic movement {}",
            artwork_id, movement_id
        );
        let txn = self.db.begin().await?;
        require_movement(&txn, movement_id).await?;
        let artwork = require_artwork(&txn, artwork_id).await?;

        let artwork =
            set_owner(&txn, artwork, artwork::Column::MovementId, Some(movement_id)).await?;

        txn.commit().await?;
        info!(
            "Finished association of artwork {} to artistic movement {}",
            artwork_id, movement_id
        );
        Ok(artwork)
    }

    pub async fn get_artworks(&self, movement_id: i32) -> Result<Vec<artwork::Model>> {
        info!("Starting lookup of the artworks of artistic movement {}", movement_id);
        require_movement(&self.db, movement_id).await?;
        let artworks = ArtworkRepository::new(&self.db)
            .find_by_owner(artwork::Column::MovementId, movement_id)
            .await?;
        info!("Finished lookup of the artworks of artistic movement {}", movement_id);
        Ok(artworks)
    }

    pub async fn get_artwork(&self, movement_id: i32, artwork_id: i32) -> Result<artwork::Model> {
        info!("Starting lookup of artwork {} of artistic movement {}", artwork_id, movement_id);
        require_movement(&self.db, movement_id).await?;
        let artwork = require_artwork(&self.db, artwork_id).await?;

        if owner_of(&artwork, artwork::Column::MovementId) != Some(movement_id) {
            return Err(AppError::illegal(messages::MOVEMENT_ARTWORK_NOT_ASSOCIATED));
        }
        info!("Finished lookup of artwork {} of artistic movement {}", artwork_id, movement_id);
        Ok(artwork)
    }

    pub async fn replace_artworks(
        &self,
        movement_id: i32,
        artwork_ids: &[i32],
    ) -> Result<Vec<artwork::Model>> {
        info!("Starting replacement of the artworks of artistic movement {}", movement_id);
        let txn = self.db.begin().await?;
        require_movement(&txn, movement_id).await?;
        for &artwork_id in artwork_ids {
            require_artwork(&txn, artwork_id).await?;
        }

        let repo = ArtworkRepository::new(&txn);
        repo.reassign_owner(artwork::Column::MovementId, movement_id, artwork_ids)
            .await?;
        let artworks = repo
            .find_by_owner(artwork::Column::MovementId, movement_id)
            .await?;

        txn.commit().await?;
        info!("Finished replacement of the artworks of artistic movement {}", movement_id);
        Ok(artworks)
    }

    pub async fn remove_artwork(&self, movement_id: i32, artwork_id: i32) -> Result<()> {
        info!("Starting removal of artwork {} from artistic movement {}", artwork_id, movement_id);
        let txn = self.db.begin().await?;
        require_movement(&txn, movement_id).await?;
        let artwork = require_artwork(&txn, artwork_id).await?;

        if owner_of(&artwork, artwork::Column::MovementId) == Some(movement_id) {
            set_owner(&txn, artwork, artwork::Column::MovementId, None).await?;
        }

        txn.commit().await?;
        info!("Finished removal of artwork {} from artistic movement {}", artwork_id, movement_id);
        Ok(())
    }
}

/// Country where an artistic movement originated.
pub struct MovementCountryService {
    db: DatabaseConnection,
}

impl MovementCountryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn replace_country(
        &self,
        movement_id: i32,
        country_id: i32,
    ) -> Result<movement::Model> {
        info!("Starting update of the origin country of artistic movement {}", movement_id);
        let txn = self.db.begin().await?;
        let movement = require_movement(&txn, movement_id).await?;
        require_country(&txn, country_id).await?;

        let mut active: movement::ActiveModel = movement.into();
        active.origin_country_id = Set(Some(country_id));
        let movement = MovementRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of the origin country of artistic movement {}", movement_id);
        Ok(movement)
    }

    pub async fn remove_country(&self, movement_id: i32) -> Result<()> {
        info!("Starting removal of the origin country of artistic movement {}", movement_id);
        let txn = self.db.begin().await?;
        let movement = require_movement(&txn, movement_id).await?;
        if movement.origin_country_id.is_none() {
            return Err(AppError::not_found(messages::MOVEMENT_HAS_NO_COUNTRY));
        }

        let mut active: movement::ActiveModel = movement.into();
        active.origin_country_id = Set(None);
        MovementRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished removal of the origin country of artistic movement {}", movement_id);
        Ok(())
    }
}
