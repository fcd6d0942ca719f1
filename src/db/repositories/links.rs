use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::entities::{
    artist, artist_movement, artist_museum, movement, movement_museum, museum,
};
use crate::error::Result;

/// Rows of the `artist_museum` join table.
pub struct ArtistMuseumLinks<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ArtistMuseumLinks<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn museums_of(&self, artist: &artist::Model) -> Result<Vec<museum::Model>> {
        Ok(artist
            .find_related(museum::Entity)
            .order_by_asc(museum::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn artists_of(&self, museum: &museum::Model) -> Result<Vec<artist::Model>> {
        Ok(museum
            .find_related(artist::Entity)
            .order_by_asc(artist::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn exists(&self, artist_id: i32, museum_id: i32) -> Result<bool> {
        Ok(artist_museum::Entity::find_by_id((artist_id, museum_id))
            .one(self.conn)
            .await?
            .is_some())
    }

    /// Inserts the pair unless it is already present.
    pub async fn link(&self, artist_id: i32, museum_id: i32) -> Result<()> {
        if self.exists(artist_id, museum_id).await? {
            return Ok(());
        }
        let row = artist_museum::ActiveModel {
            artist_id: Set(artist_id),
            museum_id: Set(museum_id),
        };
        artist_museum::Entity::insert(row)
            .exec_without_returning(self.conn)
            .await?;
        Ok(())
    }

    pub async fn unlink(&self, artist_id: i32, museum_id: i32) -> Result<()> {
        artist_museum::Entity::delete_by_id((artist_id, museum_id))
            .exec(self.conn)
            .await?;
        Ok(())
    }

    pub async fn replace_museums(&self, artist_id: i32, museum_ids: &[i32]) -> Result<()> {
        artist_museum::Entity::delete_many()
            .filter(artist_museum::Column::ArtistId.eq(artist_id))
            .exec(self.conn)
            .await?;
        for &museum_id in museum_ids {
            self.link(artist_id, museum_id).await?;
        }
        Ok(())
    }

    pub async fn replace_artists(&self, museum_id: i32, artist_ids: &[i32]) -> Result<()> {
        artist_museum::Entity::delete_many()
            .filter(artist_museum::Column::MuseumId.eq(museum_id))
            .exec(self.conn)
            .await?;
        for &artist_id in artist_ids {
            self.link(artist_id, museum_id).await?;
        }
        Ok(())
    }
}

/// Rows of the `artist_movement` join table.
pub struct ArtistMovementLinks<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ArtistMovementLinks<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn movements_of(&self, artist: &artist::Model) -> Result<Vec<movement::Model>> {
        Ok(artist
            .find_related(movement::Entity)
            .order_by_asc(movement::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn artists_of(&self, movement: &movement::Model) -> Result<Vec<artist::Model>> {
        Ok(movement
            .find_related(artist::Entity)
            .order_by_asc(artist::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn exists(&self, artist_id: i32, movement_id: i32) -> Result<bool> {
        Ok(artist_movement::Entity::find_by_id((artist_id, movement_id))
            .one(self.conn)
            .await?
            .is_some())
    }

    /// Inserts the pair unless it is already present.
    pub async fn link(&self, artist_id: i32, movement_id: i32) -> Result<()> {
        if self.exists(artist_id, movement_id).await? {
            return Ok(());
        }
        let row = artist_movement::ActiveModel {
            artist_id: Set(artist_id),
            movement_id: Set(movement_id),
        };
        artist_movement::Entity::insert(row)
            .exec_without_returning(self.conn)
            .await?;
        Ok(())
    }

    pub async fn unlink(&self, artist_id: i32, movement_id: i32) -> Result<()> {
        artist_movement::Entity::delete_by_id((artist_id, movement_id))
            .exec(self.conn)
            .await?;
        Ok(())
    }

    pub async fn replace_movements(&self, artist_id: i32, movement_ids: &[i32]) -> Result<()> {
        artist_movement::Entity::delete_many()
            .filter(artist_movement::Column::ArtistId.eq(artist_id))
            .exec(self.conn)
            .await?;
        for &movement_id in movement_ids {
            self.link(artist_id, movement_id).await?;
        }
        Ok(())
    }

    pub async fn replace_artists(&self, movement_id: i32, artist_ids: &[i32]) -> Result<()> {
        artist_movement::Entity::delete_many()
            .filter(artist_movement::Column::MovementId.eq(movement_id))
            .exec(self.conn)
            .await?;
        for &artist_id in artist_ids {
            self.link(artist_id, movement_id).await?;
        }
        Ok(())
    }
}

/// Rows of the `movement_museum` join table.
pub struct MovementMuseumLinks<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> MovementMuseumLinks<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn museums_of(&self, movement: &movement::Model) -> Result<Vec<museum::Model>> {
        Ok(movement
            .find_related(museum::Entity)
            .order_by_asc(museum::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn movements_of(&self, museum: &museum::Model) -> Result<Vec<movement::Model>> {
        Ok(museum
            .find_related(movement::Entity)
            .order_by_asc(movement::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn exists(&self, movement_id: i32, museum_id: i32) -> Result<bool> {
        Ok(movement_museum::Entity::find_by_id((movement_id, museum_id))
            .one(self.conn)
            .await?
            .is_some())
    }

    /// Inserts the pair unless it is already present.
    pub async fn link(&self, movement_id: i32, museum_id: i32) -> Result<()> {
        if self.exists(movement_id, museum_id).await? {
            return Ok(());
        }
        let row = movement_museum::ActiveModel {
            movement_id: Set(movement_id),
            museum_id: Set(museum_id),
        };
        movement_museum::Entity::insert(row)
            .exec_without_returning(self.conn)
            .await?;
        Ok(())
    }

    pub async fn unlink(&self, movement_id: i32, museum_id: i32) -> Result<()> {
        movement_museum::Entity::delete_by_id((movement_id, museum_id))
            .exec(self.conn)
            .await?;
        Ok(())
    }

    pub async fn replace_museums(&self, movement_id: i32, museum_ids: &[i32]) -> Result<()> {
        movement_museum::Entity::delete_many()
            .filter(movement_museum::Column::MovementId.eq(movement_id))
            .exec(self.conn)
            .await?;
        for &museum_id in museum_ids {
            self.link(movement_id, museum_id).await?;
        }
        Ok(())
    }

    pub async fn replace_movements(&self, museum_id: i32, movement_ids: &[i32]) -> Result<()> {
        movement_museum::Entity::delete_many()
            .filter(movement_museum::Column::MuseumId.eq(museum_id))
            .exec(self.conn)
            .await?;
        for &movement_id in movement_ids {
            self.link(movement_id, museum_id).await?;
        }
        Ok(())
    }
}
