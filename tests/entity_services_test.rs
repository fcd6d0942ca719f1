//! Integration tests for the entity services
//!
//! Covers the business rules enforced on create, update and delete:
//! - Required and unique fields
//! - Date ordering and future-date checks
//! - References to other entities
//! - Delete guards for entities that still have dependents

use chrono::Days;
use fake::faker::address::en::{CityName, CountryName};
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;
use modern_art_museum::dto::*;
use modern_art_museum::error::{messages, AppError};
use modern_art_museum::services::validation::today;
use modern_art_museum::services::*;
use modern_art_museum::test_utils::*;
use pretty_assertions::assert_eq;
use sea_orm::DatabaseConnection;

fn unique(base: String) -> String {
    format!("{} {}", base, get_test_id())
}

fn is_illegal<T: std::fmt::Debug>(result: &Result<T, AppError>) -> bool {
    matches!(result, Err(AppError::IllegalOperation(_)))
}

fn is_not_found<T: std::fmt::Debug>(result: &Result<T, AppError>) -> bool {
    matches!(result, Err(AppError::NotFound(_)))
}

fn country_payload() -> CountryPayload {
    let name = unique(CountryName().fake());
    CountryPayload {
        coordinates: Some(format!("{name} coords")),
        name: Some(name),
        image: None,
    }
}

async fn valid_artist_payload(db: &DatabaseConnection) -> ArtistPayload {
    let country = create_test_country(db, &unique(CountryName().fake())).await;
    ArtistPayload {
        name: Some(unique(Name().fake())),
        image: Some("https://example.org/artist.png".into()),
        birth_date: Some(date(1904, 5, 11)),
        death_date: Some(date(1989, 1, 23)),
        birth_country: Some(IdRef::from(country.id)),
        death_country: Some(IdRef::from(country.id)),
    }
}

// ============================================================================
// Countries
// ============================================================================

#[tokio::test]
async fn test_create_country() {
    let db = setup_test_db().await;
    let service = CountryService::new(db.clone());
    let payload = country_payload();

    let country = service.create(payload.clone()).await.unwrap();

    assert_eq!(Some(country.name.clone()), payload.name);
    assert_eq!(service.get(country.id).await.unwrap(), country);
}

#[tokio::test]
async fn test_create_country_rejects_empty_and_duplicate_fields() {
    let db = setup_test_db().await;
    let service = CountryService::new(db.clone());
    let existing = service.create(country_payload()).await.unwrap();

    let empty_name = CountryPayload {
        name: Some(String::new()),
        ..country_payload()
    };
    assert!(is_illegal(&service.create(empty_name).await));

    let duplicate_name = CountryPayload {
        name: Some(existing.name.clone()),
        ..country_payload()
    };
    assert!(is_illegal(&service.create(duplicate_name).await));

    let duplicate_coordinates = CountryPayload {
        coordinates: Some(existing.coordinates.clone()),
        ..country_payload()
    };
    assert!(is_illegal(&service.create(duplicate_coordinates).await));

    let missing_coordinates = CountryPayload {
        coordinates: None,
        ..country_payload()
    };
    assert!(is_illegal(&service.create(missing_coordinates).await));
}

#[tokio::test]
async fn test_update_country_keeps_own_name() {
    let db = setup_test_db().await;
    let service = CountryService::new(db.clone());
    let country = service.create(country_payload()).await.unwrap();

    let updated = service
        .update(
            country.id,
            CountryPayload {
                name: Some(country.name.clone()),
                coordinates: Some(country.coordinates.clone()),
                image: Some("flag.png".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.image.as_deref(), Some("flag.png"));
}

#[tokio::test]
async fn test_get_missing_country_is_not_found() {
    let db = setup_test_db().await;
    let service = CountryService::new(db.clone());

    assert!(is_not_found(&service.get(0).await));
    assert!(is_not_found(&service.update(0, country_payload()).await));
    assert!(is_not_found(&service.delete(0).await));
}

#[tokio::test]
async fn test_delete_country_with_dependents_is_illegal() {
    let db = setup_test_db().await;
    let service = CountryService::new(db.clone());

    let with_city = create_test_country(&db, &unique(CountryName().fake())).await;
    create_test_city(&db, &unique(CityName().fake()), Some(with_city.id)).await;
    assert!(is_illegal(&service.delete(with_city.id).await));

    let with_artist = create_test_country(&db, &unique(CountryName().fake())).await;
    create_test_artist(&db, &unique(Name().fake()), Some(with_artist.id)).await;
    assert!(is_illegal(&service.delete(with_artist.id).await));

    let with_museum = create_test_country(&db, &unique(CountryName().fake())).await;
    create_test_museum(&db, &unique(Name().fake()), Some(with_museum.id)).await;
    assert!(is_illegal(&service.delete(with_museum.id).await));

    let empty = create_test_country(&db, &unique(CountryName().fake())).await;
    service.delete(empty.id).await.unwrap();
    assert!(is_not_found(&service.get(empty.id).await));
}

// ============================================================================
// Cities
// ============================================================================

#[tokio::test]
async fn test_city_crud() {
    let db = setup_test_db().await;
    let service = CityService::new(db.clone());
    let country = create_test_country(&db, &unique(CountryName().fake())).await;
    let name = unique(CityName().fake());

    let city = service
        .create(CityPayload {
            name: Some(name.clone()),
            coordinates: Some(format!("{name} coords")),
            image: None,
            country: Some(IdRef::from(country.id)),
        })
        .await
        .unwrap();
    assert_eq!(city.country_id, Some(country.id));

    // Omitting the country on update keeps it
    let renamed = service
        .update(
            city.id,
            CityPayload {
                name: Some(format!("{name} renamed")),
                coordinates: Some(city.coordinates.clone()),
                image: None,
                country: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.country_id, Some(country.id));

    service.delete(city.id).await.unwrap();
    assert!(service.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_city_rejects_unknown_country_and_duplicates() {
    let db = setup_test_db().await;
    let service = CityService::new(db.clone());
    let existing = create_test_city(&db, "Medellin", None).await;

    let dangling = CityPayload {
        name: Some("Cali".into()),
        coordinates: Some("3.45,-76.53".into()),
        image: None,
        country: Some(IdRef::from(4242)),
    };
    assert!(is_illegal(&service.create(dangling).await));

    let duplicate = CityPayload {
        name: Some(existing.name.clone()),
        coordinates: Some("6.24,-75.58".into()),
        image: None,
        country: None,
    };
    assert!(is_illegal(&service.create(duplicate).await));
}

// ============================================================================
// Artists
// ============================================================================

#[tokio::test]
async fn test_create_artist() {
    let db = setup_test_db().await;
    let service = ArtistService::new(db.clone());
    let payload = valid_artist_payload(&db).await;

    let artist = service.create(payload.clone()).await.unwrap();

    assert_eq!(Some(artist.name.clone()), payload.name);
    assert_eq!(artist.birth_date, payload.birth_date);
    assert_eq!(artist.death_date, payload.death_date);
    assert_eq!(artist.birth_country_id, payload.birth_country.map(|c| c.id));
}

#[tokio::test]
async fn test_create_artist_date_rules() {
    let db = setup_test_db().await;
    let service = ArtistService::new(db.clone());
    let base = valid_artist_payload(&db).await;

    let missing_death = ArtistPayload {
        death_date: None,
        ..base.clone()
    };
    assert!(is_illegal(&service.create(missing_death).await));

    let death_today = ArtistPayload {
        death_date: Some(today()),
        name: Some(unique(Name().fake())),
        ..base.clone()
    };
    assert!(is_illegal(&service.create(death_today).await));

    let birth_after_death = ArtistPayload {
        birth_date: Some(date(1990, 1, 1)),
        death_date: Some(date(1980, 1, 1)),
        name: Some(unique(Name().fake())),
        ..base.clone()
    };
    assert!(is_illegal(&service.create(birth_after_death).await));

    let missing_birth = ArtistPayload {
        birth_date: None,
        name: Some(unique(Name().fake())),
        ..base
    };
    assert!(is_illegal(&service.create(missing_birth).await));
}

#[tokio::test]
async fn test_create_artist_country_rules() {
    let db = setup_test_db().await;
    let service = ArtistService::new(db.clone());
    let base = valid_artist_payload(&db).await;

    let no_birth_country = ArtistPayload {
        birth_country: None,
        ..base.clone()
    };
    assert!(is_illegal(&service.create(no_birth_country).await));

    let unknown_death_country = ArtistPayload {
        death_country: Some(IdRef::from(987_654)),
        ..base
    };
    assert!(is_illegal(&service.create(unknown_death_country).await));
}

#[tokio::test]
async fn test_create_artist_rejects_duplicate_name() {
    let db = setup_test_db().await;
    let service = ArtistService::new(db.clone());
    let payload = valid_artist_payload(&db).await;

    service.create(payload.clone()).await.unwrap();
    assert!(is_illegal(&service.create(payload).await));
}

#[tokio::test]
async fn test_update_artist() {
    let db = setup_test_db().await;
    let service = ArtistService::new(db.clone());
    let artist = service
        .create(valid_artist_payload(&db).await)
        .await
        .unwrap();
    let other = create_test_artist(&db, &unique(Name().fake()), None).await;

    let taken = ArtistPayload {
        name: Some(other.name.clone()),
        ..ArtistPayload::default()
    };
    assert!(is_illegal(&service.update(artist.id, taken).await));

    let new_name = unique(Name().fake());
    let updated = service
        .update(
            artist.id,
            ArtistPayload {
                name: Some(new_name.clone()),
                birth_date: artist.birth_date,
                death_date: artist.death_date,
                ..ArtistPayload::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, new_name);
    // Countries stay when the payload omits them
    assert_eq!(updated.birth_country_id, artist.birth_country_id);
}

#[tokio::test]
async fn test_delete_artist_with_artworks_is_illegal() {
    let db = setup_test_db().await;
    let service = ArtistService::new(db.clone());
    let artist = create_test_artist(&db, &unique(Name().fake()), None).await;
    let artwork = create_test_artwork(&db, "Self-portrait").await;

    ArtistArtworkService::new(db.clone())
        .add_artwork(artist.id, artwork.id)
        .await
        .unwrap();
    assert!(is_illegal(&service.delete(artist.id).await));

    ArtistArtworkService::new(db.clone())
        .remove_artwork(artist.id, artwork.id)
        .await
        .unwrap();
    service.delete(artist.id).await.unwrap();
    assert!(is_not_found(&service.get(artist.id).await));
}

// ============================================================================
// Museums
// ============================================================================

#[tokio::test]
async fn test_museum_rules() {
    let db = setup_test_db().await;
    let service = MuseumService::new(db.clone());
    let country = create_test_country(&db, &unique(CountryName().fake())).await;
    let name = unique(format!("Museo {}", Name().fake::<String>()));

    let no_location = MuseumPayload {
        name: Some(name.clone()),
        ..MuseumPayload::default()
    };
    assert!(is_illegal(&service.create(no_location).await));

    let negative = MuseumPayload {
        name: Some(name.clone()),
        total_artworks: Some(-1),
        location: Some(IdRef::from(country.id)),
        ..MuseumPayload::default()
    };
    assert!(is_illegal(&service.create(negative).await));

    let museum = service
        .create(MuseumPayload {
            name: Some(name.clone()),
            address: Some("Carrera 7".into()),
            total_artworks: Some(120),
            location: Some(IdRef::from(country.id)),
            ..MuseumPayload::default()
        })
        .await
        .unwrap();
    assert_eq!(museum.country_id, Some(country.id));

    let duplicate = MuseumPayload {
        name: Some(name),
        location: Some(IdRef::from(country.id)),
        ..MuseumPayload::default()
    };
    assert!(is_illegal(&service.create(duplicate).await));
}

#[tokio::test]
async fn test_delete_museum_guards() {
    let db = setup_test_db().await;
    let service = MuseumService::new(db.clone());

    let with_employee = create_test_museum(&db, &unique(Name().fake()), None).await;
    create_test_employee(&db, &unique(Name().fake()), Some(with_employee.id)).await;
    assert!(is_illegal(&service.delete(with_employee.id).await));

    let with_artwork = create_test_museum(&db, &unique(Name().fake()), None).await;
    let artwork = create_test_artwork(&db, "Exhibited").await;
    MuseumArtworkService::new(db.clone())
        .add_artwork(with_artwork.id, artwork.id)
        .await
        .unwrap();
    assert!(is_illegal(&service.delete(with_artwork.id).await));

    let empty = create_test_museum(&db, &unique(Name().fake()), None).await;
    service.delete(empty.id).await.unwrap();
}

// ============================================================================
// Artworks
// ============================================================================

#[tokio::test]
async fn test_artwork_rules() {
    let db = setup_test_db().await;
    let service = ArtworkService::new(db.clone());

    let future = ArtworkPayload {
        name: Some("Tomorrow".into()),
        publication_date: today().checked_add_days(Days::new(1)),
        ..ArtworkPayload::default()
    };
    assert!(is_illegal(&service.create(future).await));

    let no_name = ArtworkPayload {
        publication_date: Some(date(1950, 1, 1)),
        ..ArtworkPayload::default()
    };
    assert!(is_illegal(&service.create(no_name).await));

    let dangling_museum = ArtworkPayload {
        name: Some("Lost".into()),
        publication_date: Some(date(1950, 1, 1)),
        museum: Some(IdRef::from(31337)),
        ..ArtworkPayload::default()
    };
    assert!(is_illegal(&service.create(dangling_museum).await));

    let artwork = service
        .create(ArtworkPayload {
            name: Some("The Persistence of Memory".into()),
            kind: Some("Oil".into()),
            description: Some(Sentence(3..8).fake()),
            publication_date: Some(date(1931, 1, 1)),
            ..ArtworkPayload::default()
        })
        .await
        .unwrap();
    assert_eq!(artwork.kind.as_deref(), Some("Oil"));
}

#[tokio::test]
async fn test_update_artwork_replaces_references() {
    let db = setup_test_db().await;
    let service = ArtworkService::new(db.clone());
    let museum = create_test_museum(&db, &unique(Name().fake()), None).await;

    let artwork = service
        .create(ArtworkPayload {
            name: Some("Water Lilies".into()),
            publication_date: Some(date(1906, 1, 1)),
            museum: Some(IdRef::from(museum.id)),
            ..ArtworkPayload::default()
        })
        .await
        .unwrap();
    assert_eq!(artwork.museum_id, Some(museum.id));

    let updated = service
        .update(
            artwork.id,
            ArtworkPayload {
                name: Some("Water Lilies".into()),
                publication_date: Some(date(1906, 1, 1)),
                ..ArtworkPayload::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.museum_id, None);
}

#[tokio::test]
async fn test_delete_artwork_guards() {
    let db = setup_test_db().await;
    let service = ArtworkService::new(db.clone());
    let movement = create_test_movement(&db, "Surrealism", None).await;

    let in_movement = create_test_artwork(&db, "The Elephants").await;
    ArtworkMovementService::new(db.clone())
        .add_movement(in_movement.id, movement.id)
        .await
        .unwrap();
    assert!(is_illegal(&service.delete(in_movement.id).await));

    let commented = create_test_artwork(&db, "Commented").await;
    create_test_comment(&db, "5", Some(commented.id)).await;
    assert!(is_illegal(&service.delete(commented.id).await));

    let free = create_test_artwork(&db, "Free").await;
    service.delete(free.id).await.unwrap();
    assert!(is_not_found(&service.get(free.id).await));
}

// ============================================================================
// Movements
// ============================================================================

#[tokio::test]
async fn test_movement_rules() {
    let db = setup_test_db().await;
    let service = MovementService::new(db.clone());
    let country = create_test_country(&db, &unique(CountryName().fake())).await;

    let empty = MovementPayload {
        name: Some("  ".into()),
        ..MovementPayload::default()
    };
    assert!(is_illegal(&service.create(empty).await));

    let movement = service
        .create(MovementPayload {
            name: Some("Muralism".into()),
            peak_date: Some(date(1930, 1, 1)),
            origin_country: Some(IdRef::from(country.id)),
            ..MovementPayload::default()
        })
        .await
        .unwrap();
    assert_eq!(movement.origin_country_id, Some(country.id));

    let artwork = create_test_artwork(&db, "Man at the Crossroads").await;
    MovementArtworkService::new(db.clone())
        .add_artwork(movement.id, artwork.id)
        .await
        .unwrap();
    assert!(is_illegal(&service.delete(movement.id).await));
}

// ============================================================================
// Employees and comments
// ============================================================================

#[tokio::test]
async fn test_employee_rules() {
    let db = setup_test_db().await;
    let service = EmployeeService::new(db.clone());
    let country = create_test_country(&db, &unique(CountryName().fake())).await;
    let museum = create_test_museum(&db, &unique(Name().fake()), None).await;
    let name = unique(Name().fake());

    let payload = EmployeePayload {
        name: Some(name.clone()),
        birth_date: Some(date(1985, 7, 7)),
        birth_country: Some(IdRef::from(country.id)),
        museum: Some(IdRef::from(museum.id)),
        ..EmployeePayload::default()
    };

    let no_museum = EmployeePayload {
        museum: None,
        ..payload.clone()
    };
    assert!(is_illegal(&service.create(no_museum).await));

    let employee = service.create(payload.clone()).await.unwrap();
    assert_eq!(employee.museum_id, Some(museum.id));
    assert!(is_illegal(&service.create(payload).await));

    // Still attached to its museum
    assert!(is_illegal(&service.delete(employee.id).await));
    EmployeeMuseumService::new(db.clone())
        .remove_museum(employee.id)
        .await
        .unwrap();
    service.delete(employee.id).await.unwrap();
}

#[tokio::test]
async fn test_comment_rules() {
    let db = setup_test_db().await;
    let service = CommentService::new(db.clone());
    let artwork = create_test_artwork(&db, "Starry Night").await;

    let no_rating = CommentPayload {
        publication_date: Some(date(2022, 2, 2)),
        ..CommentPayload::default()
    };
    assert!(is_illegal(&service.create(no_rating).await));

    let future = CommentPayload {
        rating: Some("4".into()),
        publication_date: today().checked_add_days(Days::new(3)),
        ..CommentPayload::default()
    };
    assert!(is_illegal(&service.create(future).await));

    let comment = service
        .create(CommentPayload {
            rating: Some("5".into()),
            content: Some(Sentence(3..8).fake()),
            publication_date: Some(date(2022, 2, 2)),
            artwork: Some(IdRef::from(artwork.id)),
        })
        .await
        .unwrap();

    assert!(is_illegal(&service.delete(comment.id).await));
    CommentArtworkService::new(db.clone())
        .remove_artwork(comment.id)
        .await
        .unwrap();
    service.delete(comment.id).await.unwrap();
    assert_eq!(
        service.get(comment.id).await.unwrap_err().to_string(),
        format!("Not found: {}", messages::COMMENT_NOT_FOUND)
    );
}

#[tokio::test]
async fn test_movement_rejects_future_peak_and_unknown_country() {
    let db = setup_test_db().await;
    let service = MovementService::new(db.clone());

    let future_peak = MovementPayload {
        name: Some("Tomorrowism".into()),
        peak_date: today().checked_add_days(Days::new(30)),
        ..MovementPayload::default()
    };
    assert!(is_illegal(&service.create(future_peak).await));

    let unknown_origin = MovementPayload {
        name: Some("Nowhereism".into()),
        origin_country: Some(IdRef::from(55_555)),
        ..MovementPayload::default()
    };
    assert!(is_illegal(&service.create(unknown_origin).await));

    let movement = create_test_movement(&db, "Dada", None).await;
    let future_update = MovementPayload {
        name: Some("Dada".into()),
        peak_date: today().checked_add_days(Days::new(1)),
        ..MovementPayload::default()
    };
    assert!(is_illegal(&service.update(movement.id, future_update).await));
    let unchanged = service.get(movement.id).await.unwrap();
    assert_eq!(unchanged.peak_date, movement.peak_date);
}

// ============================================================================
// Missing ids
// ============================================================================

#[tokio::test]
async fn test_update_and_delete_missing_ids_are_not_found() {
    let db = setup_test_db().await;
    let missing = 424_242;

    let cities = CityService::new(db.clone());
    assert!(is_not_found(&cities.update(missing, CityPayload::default()).await));
    assert!(is_not_found(&cities.delete(missing).await));

    let artists = ArtistService::new(db.clone());
    assert!(is_not_found(&artists.get(missing).await));
    assert!(is_not_found(&artists.update(missing, ArtistPayload::default()).await));
    assert!(is_not_found(&artists.delete(missing).await));

    let museums = MuseumService::new(db.clone());
    assert!(is_not_found(&museums.get(missing).await));
    assert!(is_not_found(&museums.update(missing, MuseumPayload::default()).await));
    assert!(is_not_found(&museums.delete(missing).await));

    let artworks = ArtworkService::new(db.clone());
    assert!(is_not_found(&artworks.get(missing).await));
    assert!(is_not_found(&artworks.update(missing, ArtworkPayload::default()).await));
    assert!(is_not_found(&artworks.delete(missing).await));

    let movements = MovementService::new(db.clone());
    assert!(is_not_found(&movements.get(missing).await));
    assert!(is_not_found(&movements.update(missing, MovementPayload::default()).await));
    assert!(is_not_found(&movements.delete(missing).await));

    let employees = EmployeeService::new(db.clone());
    assert!(is_not_found(&employees.get(missing).await));
    assert!(is_not_found(&employees.update(missing, EmployeePayload::default()).await));
    assert!(is_not_found(&employees.delete(missing).await));

    let comments = CommentService::new(db.clone());
    assert!(is_not_found(&comments.update(missing, CommentPayload::default()).await));
    assert!(is_not_found(&comments.delete(missing).await));
}
