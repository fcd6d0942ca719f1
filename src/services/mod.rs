mod artist;
mod artist_links;
mod artwork;
mod artwork_links;
mod city;
mod comment;
mod country;
mod employee;
mod lookup;
mod movement;
mod movement_links;
mod museum;
mod museum_links;
mod owned_artworks;
mod reference_links;
pub mod validation;

pub use artist::ArtistService;
pub use artist_links::{
    ArtistArtworkService, ArtistCountryService, ArtistMovementService, ArtistMuseumService,
};
pub use artwork::ArtworkService;
pub use artwork_links::{ArtworkArtistService, ArtworkMovementService, ArtworkMuseumService};
pub use city::CityService;
pub use comment::CommentService;
pub use country::CountryService;
pub use employee::EmployeeService;
pub use movement::MovementService;
pub use movement_links::{
    MovementArtistService, MovementArtworkService, MovementCountryService, MovementMuseumService,
};
pub use museum::MuseumService;
pub use museum_links::{
    MuseumArtistService, MuseumArtworkService, MuseumCountryService, MuseumMovementService,
};
pub use reference_links::{CityCountryService, CommentArtworkService, EmployeeMuseumService};
