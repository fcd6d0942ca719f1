use sea_orm::{ActiveModelTrait, ConnectionTrait};

use crate::db::entities::artwork;
use crate::db::repositories::ArtworkRepository;
use crate::error::Result;

/// Current value of one of the artwork's owner columns.
pub fn owner_of(artwork: &artwork::Model, owner: artwork::Column) -> Option<i32> {
    match owner {
        artwork::Column::ArtistId => artwork.artist_id,
        artwork::Column::MuseumId => artwork.museum_id,
        artwork::Column::MovementId => artwork.movement_id,
        _ => None,
    }
}

pub async fn set_owner<C: ConnectionTrait>(
    conn: &C,
    artwork: artwork::Model,
    owner: artwork::Column,
    owner_id: Option<i32>,
) -> Result<artwork::Model> {
    if owner_of(&artwork, owner) == owner_id {
        return Ok(artwork);
    }
    let mut active: artwork::ActiveModel = artwork.into();
    active.set(owner, owner_id.into());
    ArtworkRepository::new(conn).update(active).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_of_reads_the_matching_column() {
        let artwork = artwork::Model {
            id: 1,
            name: "Guernica".into(),
            kind: None,
            description: None,
            publication_date: None,
            image: None,
            museum_id: Some(2),
            artist_id: Some(3),
            movement_id: None,
        };
        assert_eq!(owner_of(&artwork, artwork::Column::MuseumId), Some(2));
        assert_eq!(owner_of(&artwork, artwork::Column::ArtistId), Some(3));
        assert_eq!(owner_of(&artwork, artwork::Column::MovementId), None);
        assert_eq!(owner_of(&artwork, artwork::Column::Name), None);
    }
}
