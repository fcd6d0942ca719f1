pub mod artist;
pub mod artist_movement;
pub mod artist_museum;
pub mod artwork;
pub mod city;
pub mod comment;
pub mod country;
pub mod employee;
pub mod movement;
pub mod movement_museum;
pub mod museum;

pub use artist::Entity as Artist;
pub use artist_movement::Entity as ArtistMovement;
pub use artist_museum::Entity as ArtistMuseum;
pub use artwork::Entity as Artwork;
pub use city::Entity as City;
pub use comment::Entity as Comment;
pub use country::Entity as Country;
pub use employee::Entity as Employee;
pub use movement::Entity as Movement;
pub use movement_museum::Entity as MovementMuseum;
pub use museum::Entity as Museum;
