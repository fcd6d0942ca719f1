mod artist;
mod artwork;
mod city;
mod comment;
mod country;
mod employee;
mod links;
mod movement;
mod museum;

pub use artist::ArtistRepository;
pub use artwork::ArtworkRepository;
pub use city::CityRepository;
pub use comment::CommentRepository;
pub use country::CountryRepository;
pub use employee::EmployeeRepository;
pub use links::{ArtistMovementLinks, ArtistMuseumLinks, MovementMuseumLinks};
pub use movement::MovementRepository;
pub use museum::MuseumRepository;
