use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::entities::country;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
    pub coordinates: String,
    pub image: Option<String>,
}

impl From<country::Model> for CountryDto {
    fn from(model: country::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            coordinates: model.coordinates,
            image: model.image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub coordinates: String,
    pub image: Option<String>,
    pub country: Option<CountryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistDto {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub birth_country: Option<CountryDto>,
    pub death_country: Option<CountryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuseumDto {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub address: Option<String>,
    pub total_artworks: Option<i32>,
    pub location: Option<CountryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementDto {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub peak_date: Option<NaiveDate>,
    pub origin_country: Option<CountryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub image: Option<String>,
    pub museum: Option<MuseumDto>,
    pub artist: Option<ArtistDto>,
    pub movement: Option<MovementDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_country: Option<CountryDto>,
    pub museum: Option<MuseumDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i32,
    pub rating: String,
    pub content: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub artwork: Option<ArtworkDto>,
}

// Detail variants embed the related collections next to the plain fields.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDetailDto {
    #[serde(flatten)]
    pub country: CountryDto,
    pub cities: Vec<CityDto>,
    pub museums: Vec<MuseumDto>,
    pub movements: Vec<MovementDto>,
    pub artists_born: Vec<ArtistDto>,
    pub artists_died: Vec<ArtistDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistDetailDto {
    #[serde(flatten)]
    pub artist: ArtistDto,
    pub museums: Vec<MuseumDto>,
    pub artworks: Vec<ArtworkDto>,
    pub movements: Vec<MovementDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuseumDetailDto {
    #[serde(flatten)]
    pub museum: MuseumDto,
    pub artists: Vec<ArtistDto>,
    pub artworks: Vec<ArtworkDto>,
    pub movements: Vec<MovementDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementDetailDto {
    #[serde(flatten)]
    pub movement: MovementDto,
    pub artworks: Vec<ArtworkDto>,
    pub museums: Vec<MuseumDto>,
    pub artists: Vec<ArtistDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDetailDto {
    #[serde(flatten)]
    pub artwork: ArtworkDto,
    pub comments: Vec<CommentDto>,
}
