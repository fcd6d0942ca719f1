use sea_orm::{DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::{
    require_artist, require_artwork, require_country, require_movement, require_museum,
};
use super::owned_artworks::{owner_of, set_owner};
use crate::db::entities::{artist, artwork, movement, museum};
use crate::db::repositories::{
    ArtistMovementLinks, ArtistMuseumLinks, ArtistRepository, ArtworkRepository,
};
use crate::error::{messages, AppError, Result};

/// Museums an artist is exhibited in.
pub struct ArtistMuseumService {
    db: DatabaseConnection,
}

impl ArtistMuseumService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_museum(&self, artist_id: i32, museum_id: i32) -> Result<museum::Model> {
        info!("Starting association of museum {} to artist {}", museum_id, artist_id);
        let txn = self.db.begin().await?;
        require_artist(&txn, artist_id).await?;
        let museum = require_museum(&txn, museum_id).await?;

        ArtistMuseumLinks::new(&txn).link(artist_id, museum_id).await?;

        txn.commit().await?;
        info!("Finished association of museum {} to artist {}", museum_id, artist_id);
        Ok(museum)
    }

    pub async fn get_museums(&self, artist_id: i32) -> Result<Vec<museum::Model>> {
        info!("Starting lookup of the museums of artist {}", artist_id);
        let artist = require_artist(&self.db, artist_id).await?;
        let museums = ArtistMuseumLinks::new(&self.db).museums_of(&artist).await?;
        info!("Finished lookup of the museums of artist {}", artist_id);
        Ok(museums)
    }

    pub async fn get_museum(&self, artist_id: i32, museum_id: i32) -> Result<museum::Model> {
        info!("Starting lookup of museum {} of artist {}", museum_id, artist_id);
        require_artist(&self.db, artist_id).await?;
        let museum = require_museum(&self.db, museum_id).await?;

        if !ArtistMuseumLinks::new(&self.db).exists(artist_id, museum_id).await? {
            return Err(AppError::illegal(messages::ARTIST_MUSEUM_NOT_ASSOCIATED));
        }
        info!("Finished lookup of museum {} of artist {}", museum_id, artist_id);
        Ok(museum)
    }

    pub async fn replace_museums(
        &self,
        artist_id: i32,
        museum_ids: &[i32],
    ) -> Result<Vec<museum::Model>> {
        info!("Starting replacement of the museums of artist {}", artist_id);
        let txn = self.db.begin().await?;
        let artist = require_artist(&txn, artist_id).await?;
        for &museum_id in museum_ids {
            require_museum(&txn, museum_id).await?;
        }

        let links = ArtistMuseumLinks::new(&txn);
        links.replace_museums(artist_id, museum_ids).await?;
        let museums = links.museums_of(&artist).await?;

        txn.commit().await?;
        info!("Finished replacement of the museums of artist {}", artist_id);
        Ok(museums)
    }

    pub async fn remove_museum(&self, artist_id: i32, museum_id: i32) -> Result<()> {
        info!("Starting removal of museum {} from artist {}", museum_id, artist_id);
        let txn = self.db.begin().await?;
        require_artist(&txn, artist_id).await?;
        require_museum(&txn, museum_id).await?;

        ArtistMuseumLinks::new(&txn).unlink(artist_id, museum_id).await?;

        txn.commit().await?;
        info!("Finished removal of museum {} from artist {}", museum_id, artist_id);
        Ok(())
    }
}

/// Artistic movements an artist belongs to.
pub struct ArtistMovementService {
    db: DatabaseConnection,
}

impl ArtistMovementService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_movement(&self, artist_id: i32, movement_id: i32) -> Result<movement::Model> {
        info!("Starting association of artistic movement {} to artist {}", movement_id, artist_id);
        let txn = self.db.begin().await?;
        require_artist(&txn, artist_id).await?;
        let movement = require_movement(&txn, movement_id).await?;

        ArtistMovementLinks::new(&txn).link(artist_id, movement_id).await?;

        txn.commit().await?;
        info!("Finished association of artistic movement {} to artist {}", movement_id, artist_id);
        Ok(movement)
    }

    pub async fn get_movements(&self, artist_id: i32) -> Result<Vec<movement::Model>> {
        info!("Starting lookup of the artistic movements of artist {}", artist_id);
        let artist = require_artist(&self.db, artist_id).await?;
        let movements = ArtistMovementLinks::new(&self.db).movements_of(&artist).await?;
        info!("Finished lookup of the artistic movements of artist {}", artist_id);
        Ok(movements)
    }

    pub async fn get_movement(&self, artist_id: i32, movement_id: i32) -> Result<movement::Model> {
        info!("Starting lookup of artistic movement {} of artist {}", movement_id, artist_id);
        require_artist(&self.db, artist_id).await?;
        let movement = require_movement(&self.db, movement_id).await?;

        if !ArtistMovementLinks::new(&self.db)
            .exists(artist_id, movement_id)
            .await?
        {
            return Err(AppError::illegal(messages::ARTIST_MOVEMENT_NOT_ASSOCIATED));
        }
        info!("Finished lookup of artistic movement {} of artist {}", movement_id, artist_id);
        Ok(movement)
    }

    pub async fn replace_movements(
        &self,
        artist_id: i32,
        movement_ids: &[i32],
    ) -> Result<Vec<movement::Model>> {
        info!("Starting replacement of the artistic movements of artist {}", artist_id);
        let txn = self.db.begin().await?;
        let artist = require_artist(&txn, artist_id).await?;
        for &movement_id in movement_ids {
            require_movement(&txn, movement_id).await?;
        }

        let links = ArtistMovementLinks::new(&txn);
        links.replace_movements(artist_id, movement_ids).await?;
        let movements = links.movements_of(&artist).await?;

        txn.commit().await?;
        info!("Finished replacement of the artistic movements of artist {}", artist_id);
        Ok(movements)
    }

    pub async fn remove_movement(&self, artist_id: i32, movement_id: i32) -> Result<()> {
        info!("Starting removal of artistic movement {} from artist {}", movement_id, artist_id);
        let txn = self.db.begin().await?;
        require_artist(&txn, artist_id).await?;
        require_movement(&txn, movement_id).await?;

        ArtistMovementLinks::new(&txn)
            .unlink(artist_id, movement_id)
            .await?;

        txn.commit().await?;
        info!("Finished removal of artistic movement {} from artist {}", movement_id, artist_id);
        Ok(())
    }
}

/// Artworks authored by an artist, tracked through `artworks.artist_id`.
pub struct ArtistArtworkService {
    db: DatabaseConnection,
}

impl ArtistArtworkService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_artwork(&self, artist_id: i32, artwork_id: i32) -> Result<artwork::Model> {
        info!("Starting association of artwork {} to artist {}", artwork_id, artist_id);
        let txn = self.db.begin().await?;
        require_artist(&txn, artist_id).await?;
        let artwork = require_artwork(&txn, artwork_id).await?;

        let artwork = set_owner(&txn, artwork, artwork::Column::ArtistId, Some(artist_id)).await?;

        txn.commit().await?;
        info!("Finished association of artwork {} to artist {}", artwork_id, artist_id);
        Ok(artwork)
    }

    pub async fn get_artworks(&self, artist_id: i32) -> Result<Vec<artwork::Model>> {
        info!("Starting lookup of the artworks of artist {}", artist_id);
        require_artist(&self.db, artist_id).await?;
        let artworks = ArtworkRepository::new(&self.db)
            .find_by_owner(artwork::Column::ArtistId, artist_id)
            .await?;
        info!("Finished lookup of the artworks of artist {}", artist_id);
        Ok(artworks)
    }

    pub async fn get_artwork(&self, artist_id: i32, artwork_id: i32) -> Result<artwork::Model> {
        info!("Starting lookup of artwork {} of artist {}", artwork_id, artist_id);
        require_artist(&self.db, artist_id).await?;
        let artwork = require_artwork(&self.db, artwork_id).await?;

        if owner_of(&artwork, artwork::Column::ArtistId) != Some(artist_id) {
            return Err(AppError::illegal(messages::ARTIST_ARTWORK_NOT_ASSOCIATED));
        }
        info!("Finished lookup of artwork {} of artist {}", artwork_id, artist_id);
        Ok(artwork)
    }

    /// Makes the artist's artworks exactly `artwork_ids`; artworks dropped
    /// from the list lose their artist.
    pub async fn replace_artworks(
        &self,
        artist_id: i32,
        artwork_ids: &[i32],
    ) -> Result<Vec<artwork::Model>> {
        info!("Starting replacement of the artworks of artist {}", artist_id);
        let txn = self.db.begin().await?;
        require_artist(&txn, artist_id).await?;
        for &artwork_id in artwork_ids {
            require_artwork(&txn, artwork_id).await?;
        }

        let repo = ArtworkRepository::new(&txn);
        repo.reassign_owner(artwork::Column::ArtistId, artist_id, artwork_ids)
            .await?;
        let artworks = repo
            .find_by_owner(artwork::Column::ArtistId, artist_id)
            .await?;

        txn.commit().await?;
        info!("Finished replacement of the artworks of artist {}", artist_id);
        Ok(artworks)
    }

    pub async fn remove_artwork(&self, artist_id: i32, artwork_id: i32) -> Result<()> {
        info!("Starting removal of artwork {} from artist {}", artwork_id, artist_id);
        let txn = self.db.begin().await?;
        require_artist(&txn, artist_id).await?;
        let artwork = require_artwork(&txn, artwork_id).await?;

        if owner_of(&artwork, artwork::Column::ArtistId) == Some(artist_id) {
            set_owner(&txn, artwork, artwork::Column::ArtistId, None).await?;
        }

        txn.commit().await?;
        info!("Finished removal of artwork {} from artist {}", artwork_id, artist_id);
        Ok(())
    }
}

/// Birth and death countries of an artist.
pub struct ArtistCountryService {
    db: DatabaseConnection,
}

impl ArtistCountryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn replace_birth_country(
        &self,
        artist_id: i32,
        country_id: i32,
    ) -> Result<artist::Model> {
        info!("Starting update of the birth country of artist {}", artist_id);
        let txn = self.db.begin().await?;
        let artist = require_artist(&txn, artist_id).await?;
        require_country(&txn, country_id).await?;

        let mut active: artist::ActiveModel = artist.into();
        active.birth_country_id = Set(Some(country_id));
        let artist = ArtistRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of the birth country of artist {}", artist_id);
        Ok(artist)
    }

    pub async fn replace_death_country(
        &self,
        artist_id: i32,
        country_id: i32,
    ) -> Result<artist::Model> {
        info!("Starting update of the death country of artist {}", artist_id);
        let txn = self.db.begin().await?;
        let artist = require_artist(&txn, artist_id).await?;
        require_country(&txn, country_id).await?;

        let mut active: artist::ActiveModel = artist.into();
        active.death_country_id = Set(Some(country_id));
        let artist = ArtistRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of the death country of artist {}", artist_id);
        Ok(artist)
    }
}
