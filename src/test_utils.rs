//! Test utilities for the museum API
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data factories that insert rows directly, bypassing validation

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::Config,
    db::entities::{artist, artwork, city, comment, country, employee, movement, museum},
    state::AppState,
};

/// Global counter for test isolation
/// Used to build names that stay unique across a test run
static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Get a unique test ID for this test
pub fn get_test_id() -> u32 {
    TEST_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run all migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

// ============================================================================
// Test Data Factories
// ============================================================================

pub async fn create_test_country(db: &DatabaseConnection, name: &str) -> country::Model {
    let country = country::ActiveModel {
        name: Set(name.to_string()),
        coordinates: Set(format!("{name} coordinates")),
        image: Set(None),
        ..Default::default()
    };

    country.insert(db).await.expect("Failed to insert test country")
}

pub async fn create_test_city(
    db: &DatabaseConnection,
    name: &str,
    country_id: Option<i32>,
) -> city::Model {
    let city = city::ActiveModel {
        name: Set(name.to_string()),
        coordinates: Set(format!("{name} coordinates")),
        image: Set(None),
        country_id: Set(country_id),
        ..Default::default()
    };

    city.insert(db).await.expect("Failed to insert test city")
}

/// Create a test artist born and deceased in `country_id`
pub async fn create_test_artist(
    db: &DatabaseConnection,
    name: &str,
    country_id: Option<i32>,
) -> artist::Model {
    let artist = artist::ActiveModel {
        name: Set(name.to_string()),
        image: Set(None),
        birth_date: Set(Some(date(1881, 10, 25))),
        death_date: Set(Some(date(1973, 4, 8))),
        birth_country_id: Set(country_id),
        death_country_id: Set(country_id),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

pub async fn create_test_museum(
    db: &DatabaseConnection,
    name: &str,
    country_id: Option<i32>,
) -> museum::Model {
    let museum = museum::ActiveModel {
        name: Set(name.to_string()),
        image: Set(None),
        address: Set(Some("Calle 1 # 2-3".to_string())),
        total_artworks: Set(Some(0)),
        country_id: Set(country_id),
        ..Default::default()
    };

    museum.insert(db).await.expect("Failed to insert test museum")
}

pub async fn create_test_movement(
    db: &DatabaseConnection,
    name: &str,
    origin_country_id: Option<i32>,
) -> movement::Model {
    let movement = movement::ActiveModel {
        name: Set(name.to_string()),
        image: Set(None),
        description: Set(Some("An artistic movement".to_string())),
        peak_date: Set(Some(date(1910, 1, 1))),
        origin_country_id: Set(origin_country_id),
        ..Default::default()
    };

    movement.insert(db).await.expect("Failed to insert test movement")
}

/// Create a test artwork with no artist, museum or movement
pub async fn create_test_artwork(db: &DatabaseConnection, name: &str) -> artwork::Model {
    let artwork = artwork::ActiveModel {
        name: Set(name.to_string()),
        kind: Set(Some("Oil on canvas".to_string())),
        description: Set(None),
        publication_date: Set(Some(date(1937, 6, 4))),
        image: Set(None),
        museum_id: Set(None),
        artist_id: Set(None),
        movement_id: Set(None),
        ..Default::default()
    };

    artwork.insert(db).await.expect("Failed to insert test artwork")
}

pub async fn create_test_employee(
    db: &DatabaseConnection,
    name: &str,
    museum_id: Option<i32>,
) -> employee::Model {
    let employee = employee::ActiveModel {
        name: Set(name.to_string()),
        image: Set(None),
        address: Set(None),
        neighborhood: Set(None),
        birth_date: Set(Some(date(1990, 3, 14))),
        birth_country_id: Set(None),
        museum_id: Set(museum_id),
        ..Default::default()
    };

    employee.insert(db).await.expect("Failed to insert test employee")
}

pub async fn create_test_comment(
    db: &DatabaseConnection,
    rating: &str,
    artwork_id: Option<i32>,
) -> comment::Model {
    let comment = comment::ActiveModel {
        rating: Set(rating.to_string()),
        content: Set(Some("Remarkable".to_string())),
        publication_date: Set(Some(date(2021, 8, 1))),
        artwork_id: Set(artwork_id),
        ..Default::default()
    };

    comment.insert(db).await.expect("Failed to insert test comment")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        // Verify we can query the database (it has tables from migrations)
        let artists = artist::Entity::find().all(&db).await.unwrap();
        assert_eq!(artists.len(), 0);
    }

    #[tokio::test]
    async fn test_create_test_artist() {
        let db = setup_test_db().await;
        let country = create_test_country(&db, "Spain").await;
        let artist = create_test_artist(&db, "Pablo Picasso", Some(country.id)).await;

        assert_eq!(artist.name, "Pablo Picasso");
        assert_eq!(artist.birth_country_id, Some(country.id));
    }

    #[tokio::test]
    async fn test_create_test_artwork_is_unowned() {
        let db = setup_test_db().await;
        let artwork = create_test_artwork(&db, "Guernica").await;

        assert_eq!(artwork.name, "Guernica");
        assert!(artwork.artist_id.is_none());
        assert!(artwork.museum_id.is_none());
        assert!(artwork.movement_id.is_none());
    }

    #[tokio::test]
    async fn test_parallel_databases() {
        // Run two database setups in parallel - they should not interfere
        let (db1, db2) = tokio::join!(setup_test_db(), setup_test_db());

        let country1 = create_test_country(&db1, "Country 1").await;
        let country2 = create_test_country(&db2, "Country 2").await;

        // Both should be ID 1 (separate databases)
        assert_eq!(country1.id, 1);
        assert_eq!(country2.id, 1);

        let db1_countries = country::Entity::find().all(&db1).await.unwrap();
        let db2_countries = country::Entity::find().all(&db2).await.unwrap();

        assert_eq!(db1_countries.len(), 1);
        assert_eq!(db2_countries.len(), 1);
        assert_eq!(db1_countries[0].name, "Country 1");
        assert_eq!(db2_countries[0].name, "Country 2");
    }
}
