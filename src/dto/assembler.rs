use sea_orm::ConnectionTrait;

use super::responses::*;
use crate::db::entities::{artist, artwork, city, comment, country, employee, movement, museum};
use crate::db::repositories::{
    ArtistMovementLinks, ArtistMuseumLinks, ArtistRepository, ArtworkRepository, CityRepository,
    CommentRepository, CountryRepository, MovementMuseumLinks, MovementRepository,
    MuseumRepository,
};
use crate::error::Result;

/// Maps entity models to response DTOs, loading the referenced rows.
pub struct DtoAssembler<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> DtoAssembler<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    async fn country_by_id(&self, id: Option<i32>) -> Result<Option<CountryDto>> {
        let Some(id) = id else { return Ok(None) };
        Ok(CountryRepository::new(self.conn)
            .find_by_id(id)
            .await?
            .map(CountryDto::from))
    }

    async fn museum_by_id(&self, id: Option<i32>) -> Result<Option<MuseumDto>> {
        let Some(id) = id else { return Ok(None) };
        match MuseumRepository::new(self.conn).find_by_id(id).await? {
            Some(m) => Ok(Some(self.museum(m).await?)),
            None => Ok(None),
        }
    }

    async fn artist_by_id(&self, id: Option<i32>) -> Result<Option<ArtistDto>> {
        let Some(id) = id else { return Ok(None) };
        match ArtistRepository::new(self.conn).find_by_id(id).await? {
            Some(a) => Ok(Some(self.artist(a).await?)),
            None => Ok(None),
        }
    }

    async fn movement_by_id(&self, id: Option<i32>) -> Result<Option<MovementDto>> {
        let Some(id) = id else { return Ok(None) };
        match MovementRepository::new(self.conn).find_by_id(id).await? {
            Some(m) => Ok(Some(self.movement(m).await?)),
            None => Ok(None),
        }
    }

    async fn artwork_by_id(&self, id: Option<i32>) -> Result<Option<ArtworkDto>> {
        let Some(id) = id else { return Ok(None) };
        match ArtworkRepository::new(self.conn).find_by_id(id).await? {
            Some(a) => Ok(Some(self.artwork(a).await?)),
            None => Ok(None),
        }
    }

    pub fn country(&self, country: country::Model) -> CountryDto {
        CountryDto::from(country)
    }

    pub async fn city(&self, city: city::Model) -> Result<CityDto> {
        Ok(CityDto {
            country: self.country_by_id(city.country_id).await?,
            id: city.id,
            name: city.name,
            coordinates: city.coordinates,
            image: city.image,
        })
    }

    pub async fn artist(&self, artist: artist::Model) -> Result<ArtistDto> {
        Ok(ArtistDto {
            birth_country: self.country_by_id(artist.birth_country_id).await?,
            death_country: self.country_by_id(artist.death_country_id).await?,
            id: artist.id,
            name: artist.name,
            image: artist.image,
            birth_date: artist.birth_date,
            death_date: artist.death_date,
        })
    }

    pub async fn museum(&self, museum: museum::Model) -> Result<MuseumDto> {
        Ok(MuseumDto {
            location: self.country_by_id(museum.country_id).await?,
            id: museum.id,
            name: museum.name,
            image: museum.image,
            address: museum.address,
            total_artworks: museum.total_artworks,
        })
    }

    pub async fn movement(&self, movement: movement::Model) -> Result<MovementDto> {
        Ok(MovementDto {
            origin_country: self.country_by_id(movement.origin_country_id).await?,
            id: movement.id,
            name: movement.name,
            image: movement.image,
            description: movement.description,
            peak_date: movement.peak_date,
        })
    }

    pub async fn artwork(&self, artwork: artwork::Model) -> Result<ArtworkDto> {
        Ok(ArtworkDto {
            museum: self.museum_by_id(artwork.museum_id).await?,
            artist: self.artist_by_id(artwork.artist_id).await?,
            movement: self.movement_by_id(artwork.movement_id).await?,
            id: artwork.id,
            name: artwork.name,
            kind: artwork.kind,
            description: artwork.description,
            publication_date: artwork.publication_date,
            image: artwork.image,
        })
    }

    pub async fn employee(&self, employee: employee::Model) -> Result<EmployeeDto> {
        Ok(EmployeeDto {
            birth_country: self.country_by_id(employee.birth_country_id).await?,
            museum: self.museum_by_id(employee.museum_id).await?,
            id: employee.id,
            name: employee.name,
            image: employee.image,
            address: employee.address,
            neighborhood: employee.neighborhood,
            birth_date: employee.birth_date,
        })
    }

    pub async fn comment(&self, comment: comment::Model) -> Result<CommentDto> {
        Ok(CommentDto {
            artwork: self.artwork_by_id(comment.artwork_id).await?,
            id: comment.id,
            rating: comment.rating,
            content: comment.content,
            publication_date: comment.publication_date,
        })
    }

    pub async fn cities(&self, cities: Vec<city::Model>) -> Result<Vec<CityDto>> {
        let mut dtos = Vec::with_capacity(cities.len());
        for city in cities {
            dtos.push(self.city(city).await?);
        }
        Ok(dtos)
    }

    pub async fn artists(&self, artists: Vec<artist::Model>) -> Result<Vec<ArtistDto>> {
        let mut dtos = Vec::with_capacity(artists.len());
        for artist in artists {
            dtos.push(self.artist(artist).await?);
        }
        Ok(dtos)
    }

    pub async fn museums(&self, museums: Vec<museum::Model>) -> Result<Vec<MuseumDto>> {
        let mut dtos = Vec::with_capacity(museums.len());
        for museum in museums {
            dtos.push(self.museum(museum).await?);
        }
        Ok(dtos)
    }

    pub async fn movements(&self, movements: Vec<movement::Model>) -> Result<Vec<MovementDto>> {
        let mut dtos = Vec::with_capacity(movements.len());
        for movement in movements {
            dtos.push(self.movement(movement).await?);
        }
        Ok(dtos)
    }

    pub async fn artworks(&self, artworks: Vec<artwork::Model>) -> Result<Vec<ArtworkDto>> {
        let mut dtos = Vec::with_capacity(artworks.len());
        for artwork in artworks {
            dtos.push(self.artwork(artwork).await?);
        }
        Ok(dtos)
    }

    pub async fn employees(&self, employees: Vec<employee::Model>) -> Result<Vec<EmployeeDto>> {
        let mut dtos = Vec::with_capacity(employees.len());
        for employee in employees {
            dtos.push(self.employee(employee).await?);
        }
        Ok(dtos)
    }

    pub async fn comments(&self, comments: Vec<comment::Model>) -> Result<Vec<CommentDto>> {
        let mut dtos = Vec::with_capacity(comments.len());
        for comment in comments {
            dtos.push(self.comment(comment).await?);
        }
        Ok(dtos)
    }

    pub async fn country_detail(&self, country: country::Model) -> Result<CountryDetailDto> {
        let id = country.id;
        Ok(CountryDetailDto {
            cities: self
                .cities(CityRepository::new(self.conn).find_by_country(id).await?)
                .await?,
            museums: self
                .museums(MuseumRepository::new(self.conn).find_by_country(id).await?)
                .await?,
            movements: self
                .movements(
                    MovementRepository::new(self.conn)
                        .find_by_origin_country(id)
                        .await?,
                )
                .await?,
            artists_born: self
                .artists(ArtistRepository::new(self.conn).find_by_birth_country(id).await?)
                .await?,
            artists_died: self
                .artists(ArtistRepository::new(self.conn).find_by_death_country(id).await?)
                .await?,
            country: self.country(country),
        })
    }

    pub async fn artist_detail(&self, artist: artist::Model) -> Result<ArtistDetailDto> {
        let museums = ArtistMuseumLinks::new(self.conn).museums_of(&artist).await?;
        let movements = ArtistMovementLinks::new(self.conn)
            .movements_of(&artist)
            .await?;
        let artworks = ArtworkRepository::new(self.conn)
            .find_by_owner(artwork::Column::ArtistId, artist.id)
            .await?;
        Ok(ArtistDetailDto {
            museums: self.museums(museums).await?,
            artworks: self.artworks(artworks).await?,
            movements: self.movements(movements).await?,
            artist: self.artist(artist).await?,
        })
    }

    pub async fn museum_detail(&self, museum: museum::Model) -> Result<MuseumDetailDto> {
        let artists = ArtistMuseumLinks::new(self.conn).artists_of(&museum).await?;
        let movements = MovementMuseumLinks::new(self.conn)
            .movements_of(&museum)
            .await?;
        let artworks = ArtworkRepository::new(self.conn)
            .find_by_owner(artwork::Column::MuseumId, museum.id)
            .await?;
        Ok(MuseumDetailDto {
            artists: self.artists(artists).await?,
            artworks: self.artworks(artworks).await?,
            movements: self.movements(movements).await?,
            museum: self.museum(museum).await?,
        })
    }

    pub async fn movement_detail(&self, movement: movement::Model) -> Result<MovementDetailDto> {
        let artists = ArtistMovementLinks::new(self.conn)
            .artists_of(&movement)
            .await?;
        let museums = MovementMuseumLinks::new(self.conn)
            .museums_of(&movement)
            .await?;
        let artworks = ArtworkRepository::new(self.conn)
            .find_by_owner(artwork::Column::MovementId, movement.id)
            .await?;
        Ok(MovementDetailDto {
            artworks: self.artworks(artworks).await?,
            museums: self.museums(museums).await?,
            artists: self.artists(artists).await?,
            movement: self.movement(movement).await?,
        })
    }

    pub async fn artwork_detail(&self, artwork: artwork::Model) -> Result<ArtworkDetailDto> {
        let comments = CommentRepository::new(self.conn)
            .find_by_artwork(artwork.id)
            .await?;
        Ok(ArtworkDetailDto {
            comments: self.comments(comments).await?,
            artwork: self.artwork(artwork).await?,
        })
    }

    pub async fn country_details(
        &self,
        countries: Vec<country::Model>,
    ) -> Result<Vec<CountryDetailDto>> {
        let mut dtos = Vec::with_capacity(countries.len());
        for country in countries {
            dtos.push(self.country_detail(country).await?);
        }
        Ok(dtos)
    }

    pub async fn artist_details(
        &self,
        artists: Vec<artist::Model>,
    ) -> Result<Vec<ArtistDetailDto>> {
        let mut dtos = Vec::with_capacity(artists.len());
        for artist in artists {
            dtos.push(self.artist_detail(artist).await?);
        }
        Ok(dtos)
    }

    pub async fn museum_details(
        &self,
        museums: Vec<museum::Model>,
    ) -> Result<Vec<MuseumDetailDto>> {
        let mut dtos = Vec::with_capacity(museums.len());
        for museum in museums {
            dtos.push(self.museum_detail(museum).await?);
        }
        Ok(dtos)
    }

    pub async fn movement_details(
        &self,
        movements: Vec<movement::Model>,
    ) -> Result<Vec<MovementDetailDto>> {
        let mut dtos = Vec::with_capacity(movements.len());
        for movement in movements {
            dtos.push(self.movement_detail(movement).await?);
        }
        Ok(dtos)
    }

    pub async fn artwork_details(
        &self,
        artworks: Vec<artwork::Model>,
    ) -> Result<Vec<ArtworkDetailDto>> {
        let mut dtos = Vec::with_capacity(artworks.len());
        for artwork in artworks {
            dtos.push(self.artwork_detail(artwork).await?);
        }
        Ok(dtos)
    }
}
