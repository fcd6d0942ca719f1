//! Integration tests for the association services
//!
//! Each relationship pair is exercised through add / get / replace / remove,
//! checking that both sides of a join table observe the same state.

use fake::faker::address::en::CountryName;
use fake::faker::name::en::Name;
use fake::Fake;
use modern_art_museum::error::{messages, AppError};
use modern_art_museum::services::*;
use modern_art_museum::test_utils::*;
use pretty_assertions::assert_eq;

fn ids<T>(models: &[T], id: impl Fn(&T) -> i32) -> Vec<i32> {
    models.iter().map(id).collect()
}

fn fresh_name() -> String {
    format!("{} {}", Name().fake::<String>(), get_test_id())
}

fn fresh_country() -> String {
    format!("{} {}", CountryName().fake::<String>(), get_test_id())
}

// ============================================================================
// Artist <-> Museum (join table)
// ============================================================================

#[tokio::test]
async fn test_artist_museum_add_get_remove() {
    let db = setup_test_db().await;
    let service = ArtistMuseumService::new(db.clone());
    let artist = create_test_artist(&db, &fresh_name(), None).await;
    let museum = create_test_museum(&db, &fresh_name(), None).await;

    let added = service.add_museum(artist.id, museum.id).await.unwrap();
    assert_eq!(added.id, museum.id);

    let found = service.get_museum(artist.id, museum.id).await.unwrap();
    assert_eq!(found, museum);
    let all = service.get_museums(artist.id).await.unwrap();
    assert_eq!(ids(&all, |m| m.id), vec![museum.id]);

    // The inverse side sees the same link
    let artists = MuseumArtistService::new(db.clone())
        .get_artists(museum.id)
        .await
        .unwrap();
    assert_eq!(ids(&artists, |a| a.id), vec![artist.id]);

    service.remove_museum(artist.id, museum.id).await.unwrap();
    assert!(service.get_museums(artist.id).await.unwrap().is_empty());

    let err = service.get_museum(artist.id, museum.id).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Illegal operation: {}", messages::ARTIST_MUSEUM_NOT_ASSOCIATED)
    );
}

#[tokio::test]
async fn test_artist_museum_add_is_idempotent() {
    let db = setup_test_db().await;
    let service = ArtistMuseumService::new(db.clone());
    let artist = create_test_artist(&db, &fresh_name(), None).await;
    let museum = create_test_museum(&db, &fresh_name(), None).await;

    service.add_museum(artist.id, museum.id).await.unwrap();
    service.add_museum(artist.id, museum.id).await.unwrap();

    assert_eq!(service.get_museums(artist.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_artist_museum_unknown_ids() {
    let db = setup_test_db().await;
    let service = ArtistMuseumService::new(db.clone());
    let artist = create_test_artist(&db, &fresh_name(), None).await;
    let museum = create_test_museum(&db, &fresh_name(), None).await;

    let err = service.add_museum(0, museum.id).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Not found: {}", messages::ARTIST_NOT_FOUND)
    );
    let err = service.add_museum(artist.id, 0).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Not found: {}", messages::MUSEUM_NOT_FOUND)
    );
    assert!(matches!(
        service.get_museums(0).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.remove_museum(artist.id, 0).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_artist_museum_replace() {
    let db = setup_test_db().await;
    let service = ArtistMuseumService::new(db.clone());
    let artist = create_test_artist(&db, &fresh_name(), None).await;
    let first = create_test_museum(&db, &fresh_name(), None).await;
    let second = create_test_museum(&db, &fresh_name(), None).await;
    let third = create_test_museum(&db, &fresh_name(), None).await;

    service.add_museum(artist.id, first.id).await.unwrap();

    let replaced = service
        .replace_museums(artist.id, &[second.id, third.id])
        .await
        .unwrap();
    assert_eq!(ids(&replaced, |m| m.id), vec![second.id, third.id]);

    let mut current = ids(&service.get_museums(artist.id).await.unwrap(), |m| m.id);
    current.sort();
    assert_eq!(current, vec![second.id, third.id]);
}

#[tokio::test]
async fn test_replace_with_unknown_id_leaves_links_untouched() {
    let db = setup_test_db().await;
    let service = ArtistMuseumService::new(db.clone());
    let artist = create_test_artist(&db, &fresh_name(), None).await;
    let museum = create_test_museum(&db, &fresh_name(), None).await;
    service.add_museum(artist.id, museum.id).await.unwrap();

    let result = service.replace_museums(artist.id, &[9999]).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let current = service.get_museums(artist.id).await.unwrap();
    assert_eq!(ids(&current, |m| m.id), vec![museum.id]);
}

#[tokio::test]
async fn test_replace_with_empty_list_clears_links() {
    let db = setup_test_db().await;
    let service = MuseumArtistService::new(db.clone());
    let museum = create_test_museum(&db, &fresh_name(), None).await;
    let artist = create_test_artist(&db, &fresh_name(), None).await;
    service.add_artist(museum.id, artist.id).await.unwrap();

    let replaced = service.replace_artists(museum.id, &[]).await.unwrap();

    assert!(replaced.is_empty());
    assert!(service.get_artists(museum.id).await.unwrap().is_empty());
}

// ============================================================================
// Artist <-> Movement and Movement <-> Museum
// ============================================================================

#[tokio::test]
async fn test_artist_movement_round_trip_through_both_sides() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, &fresh_name(), None).await;
    let movement = create_test_movement(&db, "Cubism", None).await;

    MovementArtistService::new(db.clone())
        .add_artist(movement.id, artist.id)
        .await
        .unwrap();

    let by_artist = ArtistMovementService::new(db.clone());
    let found = by_artist.get_movement(artist.id, movement.id).await.unwrap();
    assert_eq!(found.name, "Cubism");

    by_artist.remove_movement(artist.id, movement.id).await.unwrap();
    let artists = MovementArtistService::new(db.clone())
        .get_artists(movement.id)
        .await
        .unwrap();
    assert!(artists.is_empty());

    // Removing an absent link is a no-op
    by_artist.remove_movement(artist.id, movement.id).await.unwrap();
}

#[tokio::test]
async fn test_movement_museum_links() {
    let db = setup_test_db().await;
    let service = MovementMuseumService::new(db.clone());
    let movement = create_test_movement(&db, "Fauvism", None).await;
    let museum = create_test_museum(&db, &fresh_name(), None).await;
    let other = create_test_museum(&db, &fresh_name(), None).await;

    service.add_museum(movement.id, museum.id).await.unwrap();
    assert!(matches!(
        service.get_museum(movement.id, other.id).await,
        Err(AppError::IllegalOperation(_))
    ));

    let movements = MuseumMovementService::new(db.clone())
        .get_movements(museum.id)
        .await
        .unwrap();
    assert_eq!(ids(&movements, |m| m.id), vec![movement.id]);

    service
        .replace_museums(movement.id, &[other.id])
        .await
        .unwrap();
    let museums = service.get_museums(movement.id).await.unwrap();
    assert_eq!(ids(&museums, |m| m.id), vec![other.id]);
}

// ============================================================================
// Artwork owners (foreign-key columns)
// ============================================================================

#[tokio::test]
async fn test_artist_artworks() {
    let db = setup_test_db().await;
    let service = ArtistArtworkService::new(db.clone());
    let artist = create_test_artist(&db, &fresh_name(), None).await;
    let guernica = create_test_artwork(&db, "Guernica").await;
    let dora = create_test_artwork(&db, "Dora Maar au Chat").await;

    let added = service.add_artwork(artist.id, guernica.id).await.unwrap();
    assert_eq!(added.artist_id, Some(artist.id));
    assert_eq!(
        service.get_artwork(artist.id, guernica.id).await.unwrap().id,
        guernica.id
    );
    assert!(matches!(
        service.get_artwork(artist.id, dora.id).await,
        Err(AppError::IllegalOperation(_))
    ));

    let replaced = service.replace_artworks(artist.id, &[dora.id]).await.unwrap();
    assert_eq!(ids(&replaced, |a| a.id), vec![dora.id]);

    // The artwork dropped from the list lost its artist
    let guernica = ArtworkService::new(db.clone()).get(guernica.id).await.unwrap();
    assert_eq!(guernica.artist_id, None);

    service.remove_artwork(artist.id, dora.id).await.unwrap();
    assert!(service.get_artworks(artist.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_artwork_leaves_other_owner_alone() {
    let db = setup_test_db().await;
    let service = MuseumArtworkService::new(db.clone());
    let prado = create_test_museum(&db, &fresh_name(), None).await;
    let reina_sofia = create_test_museum(&db, &fresh_name(), None).await;
    let artwork = create_test_artwork(&db, "Las Meninas").await;

    service.add_artwork(prado.id, artwork.id).await.unwrap();
    service.remove_artwork(reina_sofia.id, artwork.id).await.unwrap();

    let artworks = service.get_artworks(prado.id).await.unwrap();
    assert_eq!(ids(&artworks, |a| a.id), vec![artwork.id]);
}

#[tokio::test]
async fn test_movement_artworks() {
    let db = setup_test_db().await;
    let service = MovementArtworkService::new(db.clone());
    let movement = create_test_movement(&db, "Impressionism", None).await;
    let artwork = create_test_artwork(&db, "Impression, soleil levant").await;

    service.add_artwork(movement.id, artwork.id).await.unwrap();
    let artworks = service.get_artworks(movement.id).await.unwrap();
    assert_eq!(ids(&artworks, |a| a.id), vec![artwork.id]);

    service.replace_artworks(movement.id, &[]).await.unwrap();
    assert!(service.get_artworks(movement.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_artwork_side_single_owner_services() {
    let db = setup_test_db().await;
    let artwork = create_test_artwork(&db, "The Two Fridas").await;
    let artist = create_test_artist(&db, &fresh_name(), None).await;
    let museum = create_test_museum(&db, &fresh_name(), None).await;
    let movement = create_test_movement(&db, "Magic realism", None).await;

    let artists = ArtworkArtistService::new(db.clone());
    artists.add_artist(artwork.id, artist.id).await.unwrap();
    assert_eq!(
        artists.get_artist(artwork.id, artist.id).await.unwrap().id,
        artist.id
    );
    artists.remove_artist(artwork.id, artist.id).await.unwrap();
    assert!(matches!(
        artists.get_artist(artwork.id, artist.id).await,
        Err(AppError::IllegalOperation(_))
    ));

    let museums = ArtworkMuseumService::new(db.clone());
    museums.add_museum(artwork.id, museum.id).await.unwrap();
    assert_eq!(
        museums.get_museum(artwork.id, museum.id).await.unwrap().id,
        museum.id
    );

    let movements = ArtworkMovementService::new(db.clone());
    movements.add_movement(artwork.id, movement.id).await.unwrap();
    movements.remove_movement(artwork.id, movement.id).await.unwrap();

    let artwork = ArtworkService::new(db.clone()).get(artwork.id).await.unwrap();
    assert_eq!(artwork.artist_id, None);
    assert_eq!(artwork.museum_id, Some(museum.id));
    assert_eq!(artwork.movement_id, None);
}

// ============================================================================
// Single-valued references
// ============================================================================

#[tokio::test]
async fn test_artist_countries() {
    let db = setup_test_db().await;
    let service = ArtistCountryService::new(db.clone());
    let spain = create_test_country(&db, &fresh_country()).await;
    let france = create_test_country(&db, &fresh_country()).await;
    let artist = create_test_artist(&db, &fresh_name(), Some(spain.id)).await;

    let artist_after = service
        .replace_death_country(artist.id, france.id)
        .await
        .unwrap();
    assert_eq!(artist_after.birth_country_id, Some(spain.id));
    assert_eq!(artist_after.death_country_id, Some(france.id));

    let artist_after = service
        .replace_birth_country(artist.id, france.id)
        .await
        .unwrap();
    assert_eq!(artist_after.birth_country_id, Some(france.id));

    assert!(matches!(
        service.replace_birth_country(artist.id, 0).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_museum_location() {
    let db = setup_test_db().await;
    let service = MuseumCountryService::new(db.clone());
    let country = create_test_country(&db, &fresh_country()).await;
    let museum = create_test_museum(&db, &fresh_name(), None).await;

    let err = service.remove_country(museum.id).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Not found: {}", messages::MUSEUM_HAS_NO_COUNTRY)
    );

    let updated = service.replace_country(museum.id, country.id).await.unwrap();
    assert_eq!(updated.country_id, Some(country.id));

    service.remove_country(museum.id).await.unwrap();
    let museum = MuseumService::new(db.clone()).get(museum.id).await.unwrap();
    assert_eq!(museum.country_id, None);
}

#[tokio::test]
async fn test_movement_origin_country() {
    let db = setup_test_db().await;
    let service = MovementCountryService::new(db.clone());
    let country = create_test_country(&db, &fresh_country()).await;
    let movement = create_test_movement(&db, "Futurism", Some(country.id)).await;

    service.remove_country(movement.id).await.unwrap();
    assert!(matches!(
        service.remove_country(movement.id).await,
        Err(AppError::NotFound(_))
    ));

    let updated = service.replace_country(movement.id, country.id).await.unwrap();
    assert_eq!(updated.origin_country_id, Some(country.id));
}

#[tokio::test]
async fn test_city_country() {
    let db = setup_test_db().await;
    let service = CityCountryService::new(db.clone());
    let colombia = create_test_country(&db, &fresh_country()).await;
    let peru = create_test_country(&db, &fresh_country()).await;
    let city = create_test_city(&db, "Bogota", None).await;

    service.add_country(city.id, colombia.id).await.unwrap();
    assert_eq!(
        service.get_country(city.id, colombia.id).await.unwrap(),
        colombia
    );
    let err = service.get_country(city.id, peru.id).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Illegal operation: {}", messages::CITY_COUNTRY_NOT_ASSOCIATED)
    );

    // Removing another country keeps the current one
    service.remove_country(city.id, peru.id).await.unwrap();
    assert!(service.get_country(city.id, colombia.id).await.is_ok());

    service.remove_country(city.id, colombia.id).await.unwrap();
    let city = CityService::new(db.clone()).get(city.id).await.unwrap();
    assert_eq!(city.country_id, None);
}

#[tokio::test]
async fn test_employee_museum() {
    let db = setup_test_db().await;
    let service = EmployeeMuseumService::new(db.clone());
    let first = create_test_museum(&db, &fresh_name(), None).await;
    let second = create_test_museum(&db, &fresh_name(), None).await;
    let employee = create_test_employee(&db, &fresh_name(), Some(first.id)).await;

    let moved = service.replace_museum(employee.id, second.id).await.unwrap();
    assert_eq!(moved.museum_id, Some(second.id));

    service.remove_museum(employee.id).await.unwrap();
    let err = service.remove_museum(employee.id).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Not found: {}", messages::EMPLOYEE_HAS_NO_MUSEUM)
    );
}

#[tokio::test]
async fn test_comment_artwork() {
    let db = setup_test_db().await;
    let service = CommentArtworkService::new(db.clone());
    let artwork = create_test_artwork(&db, "Nighthawks").await;
    let comment = create_test_comment(&db, "4", None).await;

    assert!(matches!(
        service.remove_artwork(comment.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.replace_artwork(comment.id, 0).await,
        Err(AppError::NotFound(_))
    ));

    let attached = service.replace_artwork(comment.id, artwork.id).await.unwrap();
    assert_eq!(attached.artwork_id, Some(artwork.id));
    service.remove_artwork(comment.id).await.unwrap();
}

// ============================================================================
// Replacement lists
// ============================================================================

#[tokio::test]
async fn test_artwork_replace_with_unknown_id_keeps_owners() {
    let db = setup_test_db().await;
    let museum = create_test_museum(&db, &fresh_name(), None).await;
    let movement = create_test_movement(&db, "Op art", None).await;
    let artist = create_test_artist(&db, &fresh_name(), None).await;
    let kept = create_test_artwork(&db, "Kept").await;
    let candidate = create_test_artwork(&db, "Candidate").await;

    let museums = MuseumArtworkService::new(db.clone());
    museums.add_artwork(museum.id, kept.id).await.unwrap();
    assert!(matches!(
        museums.replace_artworks(museum.id, &[candidate.id, 99_999]).await,
        Err(AppError::NotFound(_))
    ));
    let owned = museums.get_artworks(museum.id).await.unwrap();
    assert_eq!(ids(&owned, |a| a.id), vec![kept.id]);

    let movements = MovementArtworkService::new(db.clone());
    movements.add_artwork(movement.id, kept.id).await.unwrap();
    assert!(matches!(
        movements.replace_artworks(movement.id, &[candidate.id, 99_999]).await,
        Err(AppError::NotFound(_))
    ));
    let owned = movements.get_artworks(movement.id).await.unwrap();
    assert_eq!(ids(&owned, |a| a.id), vec![kept.id]);

    let artists = ArtistArtworkService::new(db.clone());
    artists.add_artwork(artist.id, kept.id).await.unwrap();
    assert!(matches!(
        artists.replace_artworks(artist.id, &[candidate.id, 99_999]).await,
        Err(AppError::NotFound(_))
    ));
    let owned = artists.get_artworks(artist.id).await.unwrap();
    assert_eq!(ids(&owned, |a| a.id), vec![kept.id]);

    let candidate = ArtworkService::new(db.clone()).get(candidate.id).await.unwrap();
    assert_eq!(candidate.museum_id, None);
    assert_eq!(candidate.movement_id, None);
    assert_eq!(candidate.artist_id, None);
}

#[tokio::test]
async fn test_museum_replace_movements() {
    let db = setup_test_db().await;
    let service = MuseumMovementService::new(db.clone());
    let museum = create_test_museum(&db, &fresh_name(), None).await;
    let pop = create_test_movement(&db, "Pop art", None).await;
    let minimalism = create_test_movement(&db, "Minimalism", None).await;
    service.add_movement(museum.id, pop.id).await.unwrap();

    let replaced = service
        .replace_movements(museum.id, &[minimalism.id])
        .await
        .unwrap();
    assert_eq!(ids(&replaced, |m| m.id), vec![minimalism.id]);

    let museums = MovementMuseumService::new(db.clone())
        .get_museums(pop.id)
        .await
        .unwrap();
    assert!(museums.is_empty());
    assert!(matches!(
        service.replace_movements(museum.id, &[pop.id, 0]).await,
        Err(AppError::NotFound(_))
    ));
    let current = service.get_movements(museum.id).await.unwrap();
    assert_eq!(ids(&current, |m| m.id), vec![minimalism.id]);
}

#[tokio::test]
async fn test_movement_replace_artists() {
    let db = setup_test_db().await;
    let service = MovementArtistService::new(db.clone());
    let movement = create_test_movement(&db, "Surrealism", None).await;
    let dali = create_test_artist(&db, &fresh_name(), None).await;
    let magritte = create_test_artist(&db, &fresh_name(), None).await;
    service.add_artist(movement.id, dali.id).await.unwrap();

    let replaced = service
        .replace_artists(movement.id, &[magritte.id])
        .await
        .unwrap();
    assert_eq!(ids(&replaced, |a| a.id), vec![magritte.id]);

    let movements = ArtistMovementService::new(db.clone())
        .get_movements(dali.id)
        .await
        .unwrap();
    assert!(movements.is_empty());
}

#[tokio::test]
async fn test_replace_returns_each_linked_row_once() {
    let db = setup_test_db().await;
    let service = ArtistMuseumService::new(db.clone());
    let artist = create_test_artist(&db, &fresh_name(), None).await;
    let museum = create_test_museum(&db, &fresh_name(), None).await;

    let replaced = service
        .replace_museums(artist.id, &[museum.id, museum.id])
        .await
        .unwrap();

    assert_eq!(ids(&replaced, |m| m.id), vec![museum.id]);
    assert_eq!(service.get_museums(artist.id).await.unwrap().len(), 1);
}
