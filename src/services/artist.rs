use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::{require_artist, require_ref, resolve_ref};
use super::validation::{non_empty, required_date, strictly_before, today, unique};
use crate::db::entities::{artist, artwork, country};
use crate::db::repositories::{ArtistRepository, ArtworkRepository};
use crate::dto::ArtistPayload;
use crate::error::{AppError, Result};

pub struct ArtistService {
    db: DatabaseConnection,
}

impl ArtistService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an artist. Both dates and both countries are mandatory: the
    /// death date must lie before today and the birth date before the death
    /// date.
    pub async fn create(&self, payload: ArtistPayload) -> Result<artist::Model> {
        info!("Starting artist creation");
        let txn = self.db.begin().await?;

        let name = checked_name(&txn, payload.name, None).await?;
        let death_date = required_date(payload.death_date, "death date")?;
        strictly_before(death_date, today(), "death date")?;
        let birth_date = required_date(payload.birth_date, "birth date")?;
        strictly_before(birth_date, death_date, "birth date")?;
        let birth_country_id =
            require_ref::<country::Entity, _>(&txn, payload.birth_country, "birth country").await?;
        let death_country_id =
            require_ref::<country::Entity, _>(&txn, payload.death_country, "death country").await?;

        let artist = ArtistRepository::new(&txn)
            .create(artist::ActiveModel {
                name: Set(name),
                image: Set(payload.image),
                birth_date: Set(Some(birth_date)),
                death_date: Set(Some(death_date)),
                birth_country_id: Set(Some(birth_country_id)),
                death_country_id: Set(Some(death_country_id)),
                ..Default::default()
            })
            .await?;

        txn.commit().await?;
        info!("Finished artist creation with id {}", artist.id);
        Ok(artist)
    }

    pub async fn get_all(&self) -> Result<Vec<artist::Model>> {
        info!("Starting lookup of all artists");
        let artists = ArtistRepository::new(&self.db).find_all().await?;
        info!("Finished lookup of {} artists", artists.len());
        Ok(artists)
    }

    pub async fn get(&self, id: i32) -> Result<artist::Model> {
        info!("Starting lookup of artist {}", id);
        let artist = require_artist(&self.db, id).await?;
        info!("Finished lookup of artist {}", id);
        Ok(artist)
    }

    pub async fn update(&self, id: i32, payload: ArtistPayload) -> Result<artist::Model> {
        info!("Starting update of artist {}", id);
        let txn = self.db.begin().await?;
        let existing = require_artist(&txn, id).await?;

        let name = checked_name(&txn, payload.name, Some(id)).await?;
        check_dates(payload.birth_date, payload.death_date)?;
        let birth_country_id =
            resolve_ref::<country::Entity, _>(&txn, payload.birth_country, "birth country").await?;
        let death_country_id =
            resolve_ref::<country::Entity, _>(&txn, payload.death_country, "death country").await?;

        let mut active: artist::ActiveModel = existing.into();
        active.name = Set(name);
        active.image = Set(payload.image);
        active.birth_date = Set(payload.birth_date);
        active.death_date = Set(payload.death_date);
        if birth_country_id.is_some() {
            active.birth_country_id = Set(birth_country_id);
        }
        if death_country_id.is_some() {
            active.death_country_id = Set(death_country_id);
        }
        let artist = ArtistRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of artist {}", id);
        Ok(artist)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        info!("Starting deletion of artist {}", id);
        let txn = self.db.begin().await?;
        require_artist(&txn, id).await?;

        let artworks = ArtworkRepository::new(&txn)
            .find_by_owner(artwork::Column::ArtistId, id)
            .await?;
        if !artworks.is_empty() {
            return Err(AppError::illegal(
                "Unable to delete the artist because it has associated artworks",
            ));
        }

        ArtistRepository::new(&txn).delete_by_id(id).await?;
        txn.commit().await?;
        info!("Finished deletion of artist {}", id);
        Ok(())
    }
}

async fn checked_name<C: ConnectionTrait>(
    conn: &C,
    name: Option<String>,
    current: Option<i32>,
) -> Result<String> {
    let name = non_empty(name, "name")?;
    let same_name = ArtistRepository::new(conn).find_by_name(&name).await?;
    unique(same_name.iter().map(|a| a.id), current, "name")?;
    Ok(name)
}

fn check_dates(birth: Option<NaiveDate>, death: Option<NaiveDate>) -> Result<()> {
    if let Some(death) = death {
        strictly_before(death, today(), "death date")?;
        if let Some(birth) = birth {
            strictly_before(birth, death, "birth date")?;
        }
    }
    Ok(())
}
