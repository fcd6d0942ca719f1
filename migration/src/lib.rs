pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_countries_table;
mod m20240101_000002_create_cities_table;
mod m20240101_000003_create_artists_table;
mod m20240101_000004_create_museums_table;
mod m20240101_000005_create_movements_table;
mod m20240101_000006_create_artworks_table;
mod m20240101_000007_create_employees_table;
mod m20240101_000008_create_comments_table;
mod m20240101_000009_create_artist_museums_table;
mod m20240101_000010_create_artist_movements_table;
mod m20240101_000011_create_movement_museums_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_countries_table::Migration),
            Box::new(m20240101_000002_create_cities_table::Migration),
            Box::new(m20240101_000003_create_artists_table::Migration),
            Box::new(m20240101_000004_create_museums_table::Migration),
            Box::new(m20240101_000005_create_movements_table::Migration),
            Box::new(m20240101_000006_create_artworks_table::Migration),
            Box::new(m20240101_000007_create_employees_table::Migration),
            Box::new(m20240101_000008_create_comments_table::Migration),
            Box::new(m20240101_000009_create_artist_museums_table::Migration),
            Box::new(m20240101_000010_create_artist_movements_table::Migration),
            Box::new(m20240101_000011_create_movement_museums_table::Migration),
        ]
    }
}
