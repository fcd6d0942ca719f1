use sea_orm::{DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::{
    require_artist, require_artwork, require_country, require_movement, require_museum,
};
use super::owned_artworks::{owner_of, set_owner};
use crate::db::entities::{artist, artwork, movement, museum};
use crate::db::repositories::{
    ArtistMuseumLinks, ArtworkRepository, MovementMuseumLinks, MuseumRepository,
};
use crate::error::{messages, AppError, Result};

/// Artists exhibited in a museum; the inverse side of [`super::ArtistMuseumService`].
pub struct MuseumArtistService {
    db: DatabaseConnection,
}

impl MuseumArtistService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_artist(&self, museum_id: i32, artist_id: i32) -> Result<artist::Model> {
        info!("Starting association of artist {} to museum {}", artist_id, museum_id);
        let txn = self.db.begin().await?;
        require_museum(&txn, museum_id).await?;
        let artist = require_artist(&txn, artist_id).await?;

        ArtistMuseumLinks::new(&txn).link(artist_id, museum_id).await?;

        txn.commit().await?;
        info!("Finished association of artist {} to museum {}", artist_id, museum_id);
        Ok(artist)
    }

    pub async fn get_artists(&self, museum_id: i32) -> Result<Vec<artist::Model>> {
        info!("Starting lookup of the artists of museum {}", museum_id);
        let museum = require_museum(&self.db, museum_id).await?;
        let artists = ArtistMuseumLinks::new(&self.db).artists_of(&museum).await?;
        info!("Finished lookup of the artists of museum {}", museum_id);
        Ok(artists)
    }

    pub async fn get_artist(&self, museum_id: i32, artist_id: i32) -> Result<artist::Model> {
        info!("Starting lookup of artist {} of museum {}", artist_id, museum_id);
        require_museum(&self.db, museum_id).await?;
        let artist = require_artist(&self.db, artist_id).await?;

        if !ArtistMuseumLinks::new(&self.db).exists(artist_id, museum_id).await? {
            return Err(AppError::illegal(messages::ARTIST_MUSEUM_NOT_ASSOCIATED));
        }
        info!("Finished lookup of artist {} of museum {}", artist_id, museum_id);
        Ok(artist)
    }

    pub async fn replace_artists(
        &self,
        museum_id: i32,
        artist_ids: &[i32],
    ) -> Result<Vec<artist::Model>> {
        info!("Starting replacement of the artists of museum {}", museum_id);
        let txn = self.db.begin().await?;
        let museum = require_museum(&txn, museum_id).await?;
        for &artist_id in artist_ids {
            require_artist(&txn, artist_id).await?;
        }

        let links = ArtistMuseumLinks::new(&txn);
        links.replace_artists(museum_id, artist_ids).await?;
        let artists = links.artists_of(&museum).await?;

        txn.commit().await?;
        info!("Finished replacement of the artists of museum {}", museum_id);
        Ok(artists)
    }

    pub async fn remove_artist(&self, museum_id: i32, artist_id: i32) -> Result<()> {
        info!("Starting removal of artist {} from museum {}", artist_id, museum_id);
        let txn = self.db.begin().await?;
        require_museum(&txn, museum_id).await?;
        require_artist(&txn, artist_id).await?;

        ArtistMuseumLinks::new(&txn).unlink(artist_id, museum_id).await?;

        txn.commit().await?;
        info!("Finished removal of artist {} from museum {}", artist_id, museum_id);
        Ok(())
    }
}

/// Artistic movements exhibited in a museum.
pub struct MuseumMovementService {
    db: DatabaseConnection,
}

impl MuseumMovementService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_movement(&self, museum_id: i32, movement_id: i32) -> Result<movement::Model> {
        info!("Starting association of artistic movement {} to museum {}", movement_id, museum_id);
        let txn = self.db.begin().await?;
        require_museum(&txn, museum_id).await?;
        let movement = require_movement(&txn, movement_id).await?;

        MovementMuseumLinks::new(&txn).link(movement_id, museum_id).await?;

        txn.commit().await?;
        info!("Finished association of artistic movement {} to museum {}", movement_id, museum_id);
        Ok(movement)
    }

    pub async fn get_movements(&self, museum_id: i32) -> Result<Vec<movement::Model>> {
        info!("Starting lookup of the artistic movements of museum {}", museum_id);
        let museum = require_museum(&self.db, museum_id).await?;
        let movements = MovementMuseumLinks::new(&self.db).movements_of(&museum).await?;
        info!("Finished lookup of the artistic movements of museum {}", museum_id);
        Ok(movements)
    }

    pub async fn get_movement(&self, museum_id: i32, movement_id: i32) -> Result<movement::Model> {
        info!("Starting lookup of artistic movement {} of museum {}", movement_id, museum_id);
        require_museum(&self.db, museum_id).await?;
        let movement = require_movement(&self.db, movement_id).await?;

        if !MovementMuseumLinks::new(&self.db)
            .exists(movement_id, museum_id)
            .await?
        {
            return Err(AppError::illegal(messages::MUSEUM_MOVEMENT_NOT_ASSOCIATED));
        }
        info!("Finished lookup of artistic movement {} of museum {}", movement_id, museum_id);
        Ok(movement)
    }

    pub async fn replace_movements(
        &self,
        museum_id: i32,
        movement_ids: &[i32],
    ) -> Result<Vec<movement::Model>> {
        info!("Starting replacement of the artistic movements of museum {}", museum_id);
        let txn = self.db.begin().await?;
        let museum = require_museum(&txn, museum_id).await?;
        for &movement_id in movement_ids {
            require_movement(&txn, movement_id).await?;
        }

        let links = MovementMuseumLinks::new(&txn);
        links.replace_movements(museum_id, movement_ids).await?;
        let movements = links.movements_of(&museum).await?;

        txn.commit().await?;
        info!("Finished replacement of the artistic movements of museum {}", museum_id);
        Ok(movements)
    }

    pub async fn remove_movement(&self, museum_id: i32, movement_id: i32) -> Result<()> {
        info!("Starting removal of artistic movement {} from museum {}", movement_id, museum_id);
        let txn = self.db.begin().await?;
        require_museum(&txn, museum_id).await?;
        require_movement(&txn, movement_id).await?;

        MovementMuseumLinks::new(&txn)
            .unlink(movement_id, museum_id)
            .await?;

        txn.commit().await?;
        info!("Finished removal of artistic movement {} from museum {}", movement_id, museum_id);
        Ok(())
    }
}

/// Artworks on display in a museum, tracked through `artworks.museum_id`.
pub struct MuseumArtworkService {
    db: DatabaseConnection,
}

impl MuseumArtworkService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_artwork(&self, museum_id: i32, artwork_id: i32) -> Result<artwork::Model> {
        info!("Starting association of artwork {} to museum {}", artwork_id, museum_id);
        let txn = self.db.begin().await?;
        require_museum(&txn, museum_id).await?;
        let artwork = require_artwork(&txn, artwork_id).await?;

        let artwork = set_owner(&txn, artwork, artwork::Column::MuseumId, Some(museum_id)).await?;

        txn.commit().await?;
        info!("Finished association of artwork {} to museum {}", artwork_id, museum_id);
        Ok(artwork)
    }

    pub async fn get_artworks(&self, museum_id: i32) -> Result<Vec<artwork::Model>> {
        info!("Starting lookup of the artworks of museum {}", museum_id);
        require_museum(&self.db, museum_id).await?;
        let artworks = ArtworkRepository::new(&self.db)
            .find_by_owner(artwork::Column::MuseumId, museum_id)
            .await?;
        info!("Finished lookup of the artworks of museum {}", museum_id);
        Ok(artworks)
    }

    pub async fn get_artwork(&self, museum_id: i32, artwork_id: i32) -> Result<artwork::Model> {
        info!("Starting lookup of artwork {} of museum {}", artwork_id, museum_id);
        require_museum(&self.db, museum_id).await?;
        let artwork = require_artwork(&self.db, artwork_id).await?;

        if owner_of(&artwork, artwork::Column::MuseumId) != Some(museum_id) {
            return Err(AppError::illegal(messages::MUSEUM_ARTWORK_NOT_ASSOCIATED));
        }
        info!("Finished lookup of artwork {} of museum {}", artwork_id, museum_id);
        Ok(artwork)
    }

    pub async fn replace_artworks(
        &self,
        museum_id: i32,
        artwork_ids: &[i32],
    ) -> Result<Vec<artwork::Model>> {
        info!("Starting replacement of the artworks of museum {}", museum_id);
        let txn = self.db.begin().await?;
        require_museum(&txn, museum_id).await?;
        for &artwork_id in artwork_ids {
            require_artwork(&txn, artwork_id).await?;
        }

        let repo = ArtworkRepository::new(&txn);
        repo.reassign_owner(artwork::Column::MuseumId, museum_id, artwork_ids)
            .await?;
        let artworks = repo
            .find_by_owner(artwork::Column::MuseumId, museum_id)
            .await?;

        txn.commit().await?;
        info!("Finished replacement of the artworks of museum {}", museum_id);
        Ok(artworks)
    }

    pub async fn remove_artwork(&self, museum_id: i32, artwork_id: i32) -> Result<()> {
        info!("Starting removal of artwork {} from museum {}", artwork_id, museum_id);
        let txn = self.db.begin().await?;
        require_museum(&txn, museum_id).await?;
        let artwork = require_artwork(&txn, artwork_id).await?;

        if owner_of(&artwork, artwork::Column::MuseumId) == Some(museum_id) {
            set_owner(&txn, artwork, artwork::Column::MuseumId, None).await?;
        }

        txn.commit().await?;
        info!("Finished removal of artwork {} from museum {}", artwork_id, museum_id);
        Ok(())
    }
}

/// A museum's location.
pub struct MuseumCountryService {
    db: DatabaseConnection,
}

impl MuseumCountryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn replace_country(&self, museum_id: i32, country_id: i32) -> Result<museum::Model> {
        info!("Starting update of the location of museum {}", museum_id);
        let txn = self.db.begin().await?;
        let museum = require_museum(&txn, museum_id).await?;
        require_country(&txn, country_id).await?;

        let mut active: museum::ActiveModel = museum.into();
        active.country_id = Set(Some(country_id));
        let museum = MuseumRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of the location of museum {}", museum_id);
        Ok(museum)
    }

    pub async fn remove_country(&self, museum_id: i32) -> Result<()> {
        info!("Starting removal of the location of museum {}", museum_id);
        let txn = self.db.begin().await?;
        let museum = require_museum(&txn, museum_id).await?;
        if museum.country_id.is_none() {
            return Err(AppError::not_found(messages::MUSEUM_HAS_NO_COUNTRY));
        }

        let mut active: museum::ActiveModel = museum.into();
        active.country_id = Set(None);
        MuseumRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished removal of the location of museum {}", museum_id);
        Ok(())
    }
}
