use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};

use crate::db::entities::{artist, artwork, city, comment, country, employee, movement, museum};
use crate::db::repositories::{
    ArtistRepository, ArtworkRepository, CityRepository, CommentRepository, CountryRepository,
    EmployeeRepository, MovementRepository, MuseumRepository,
};
use crate::dto::IdRef;
use crate::error::{messages, AppError, Result};

pub async fn require_country<C: ConnectionTrait>(conn: &C, id: i32) -> Result<country::Model> {
    CountryRepository::new(conn)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(messages::COUNTRY_NOT_FOUND))
}

pub async fn require_city<C: ConnectionTrait>(conn: &C, id: i32) -> Result<city::Model> {
    CityRepository::new(conn)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(messages::CITY_NOT_FOUND))
}

pub async fn require_artist<C: ConnectionTrait>(conn: &C, id: i32) -> Result<artist::Model> {
    ArtistRepository::new(conn)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(messages::ARTIST_NOT_FOUND))
}

pub async fn require_museum<C: ConnectionTrait>(conn: &C, id: i32) -> Result<museum::Model> {
    MuseumRepository::new(conn)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(messages::MUSEUM_NOT_FOUND))
}

pub async fn require_movement<C: ConnectionTrait>(conn: &C, id: i32) -> Result<movement::Model> {
    MovementRepository::new(conn)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(messages::MOVEMENT_NOT_FOUND))
}

pub async fn require_artwork<C: ConnectionTrait>(conn: &C, id: i32) -> Result<artwork::Model> {
    ArtworkRepository::new(conn)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(messages::ARTWORK_NOT_FOUND))
}

pub async fn require_employee<C: ConnectionTrait>(conn: &C, id: i32) -> Result<employee::Model> {
    EmployeeRepository::new(conn)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(messages::EMPLOYEE_NOT_FOUND))
}

pub async fn require_comment<C: ConnectionTrait>(conn: &C, id: i32) -> Result<comment::Model> {
    CommentRepository::new(conn)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(messages::COMMENT_NOT_FOUND))
}

/// Resolves an optional `{id}` reference inside a create/update payload.
/// A dangling reference is an illegal operation, not a not-found.
pub async fn resolve_ref<E, C>(
    conn: &C,
    reference: Option<IdRef>,
    field: &str,
) -> Result<Option<i32>>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    let Some(IdRef { id }) = reference else {
        return Ok(None);
    };
    match E::find_by_id(id).one(conn).await? {
        Some(_) => Ok(Some(id)),
        None => Err(AppError::illegal(format!("The {field} is not valid"))),
    }
}

/// Like [`resolve_ref`] but the reference itself is mandatory.
pub async fn require_ref<E, C>(conn: &C, reference: Option<IdRef>, field: &str) -> Result<i32>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    resolve_ref::<E, C>(conn, reference, field)
        .await?
        .ok_or_else(|| AppError::illegal(format!("The {field} is not valid")))
}
