use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    dto::{
        ids_of, ArtistDetailDto, ArtistDto, ArtistPayload, ArtworkDetailDto, DtoAssembler, IdRef,
        MovementDetailDto, MuseumDetailDto,
    },
    error::Result,
    services::{
        ArtistArtworkService, ArtistCountryService, ArtistMovementService, ArtistMuseumService,
        ArtistService,
    },
    state::AppState,
};

pub async fn create_artist(
    State(state): State<AppState>,
    Json(payload): Json<ArtistPayload>,
) -> Result<(StatusCode, Json<ArtistDto>)> {
    let artist = ArtistService::new(state.db.clone()).create(payload).await?;
    let dto = DtoAssembler::new(&state.db).artist(artist).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<ArtistDetailDto>>> {
    let artists = ArtistService::new(state.db.clone()).get_all().await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_details(artists).await?))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistDetailDto>> {
    let artist = ArtistService::new(state.db.clone()).get(id).await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_detail(artist).await?))
}

pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ArtistPayload>,
) -> Result<Json<ArtistDto>> {
    let artist = ArtistService::new(state.db.clone()).update(id, payload).await?;
    Ok(Json(DtoAssembler::new(&state.db).artist(artist).await?))
}

pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    ArtistService::new(state.db.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Museums

pub async fn add_museum(
    State(state): State<AppState>,
    Path((artist_id, museum_id)): Path<(i32, i32)>,
) -> Result<Json<MuseumDetailDto>> {
    let museum = ArtistMuseumService::new(state.db.clone())
        .add_museum(artist_id, museum_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_detail(museum).await?))
}

pub async fn list_museums(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
) -> Result<Json<Vec<MuseumDetailDto>>> {
    let museums = ArtistMuseumService::new(state.db.clone())
        .get_museums(artist_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_details(museums).await?))
}

pub async fn get_museum(
    State(state): State<AppState>,
    Path((artist_id, museum_id)): Path<(i32, i32)>,
) -> Result<Json<MuseumDetailDto>> {
    let museum = ArtistMuseumService::new(state.db.clone())
        .get_museum(artist_id, museum_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_detail(museum).await?))
}

pub async fn replace_museums(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
    Json(museums): Json<Vec<IdRef>>,
) -> Result<Json<Vec<MuseumDetailDto>>> {
    let museums = ArtistMuseumService::new(state.db.clone())
        .replace_museums(artist_id, &ids_of(&museums))
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_details(museums).await?))
}

pub async fn remove_museum(
    State(state): State<AppState>,
    Path((artist_id, museum_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    ArtistMuseumService::new(state.db.clone())
        .remove_museum(artist_id, museum_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// Movements

pub async fn add_movement(
    State(state): State<AppState>,
    Path((artist_id, movement_id)): Path<(i32, i32)>,
) -> Result<Json<MovementDetailDto>> {
    let movement = ArtistMovementService::new(state.db.clone())
        .add_movement(artist_id, movement_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_detail(movement).await?))
}

pub async fn list_movements(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
) -> Result<Json<Vec<MovementDetailDto>>> {
    let movements = ArtistMovementService::new(state.db.clone())
        .get_movements(artist_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_details(movements).await?))
}

pub async fn get_movement(
    State(state): State<AppState>,
    Path((artist_id, movement_id)): Path<(i32, i32)>,
) -> Result<Json<MovementDetailDto>> {
    let movement = ArtistMovementService::new(state.db.clone())
        .get_movement(artist_id, movement_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_detail(movement).await?))
}

pub async fn replace_movements(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
    Json(movements): Json<Vec<IdRef>>,
) -> Result<Json<Vec<MovementDetailDto>>> {
    let movements = ArtistMovementService::new(state.db.clone())
        .replace_movements(artist_id, &ids_of(&movements))
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_details(movements).await?))
}

pub async fn remove_movement(
    State(state): State<AppState>,
    Path((artist_id, movement_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    ArtistMovementService::new(state.db.clone())
        .remove_movement(artist_id, movement_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// Artworks

pub async fn add_artwork(
    State(state): State<AppState>,
    Path((artist_id, artwork_id)): Path<(i32, i32)>,
) -> Result<Json<ArtworkDetailDto>> {
    let artwork = ArtistArtworkService::new(state.db.clone())
        .add_artwork(artist_id, artwork_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_detail(artwork).await?))
}

pub async fn list_artworks(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
) -> Result<Json<Vec<ArtworkDetailDto>>> {
    let artworks = ArtistArtworkService::new(state.db.clone())
        .get_artworks(artist_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_details(artworks).await?))
}

pub async fn get_artwork(
    State(state): State<AppState>,
    Path((artist_id, artwork_id)): Path<(i32, i32)>,
) -> Result<Json<ArtworkDetailDto>> {
    let artwork = ArtistArtworkService::new(state.db.clone())
        .get_artwork(artist_id, artwork_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_detail(artwork).await?))
}

pub async fn replace_artworks(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
    Json(artworks): Json<Vec<IdRef>>,
) -> Result<Json<Vec<ArtworkDetailDto>>> {
    let artworks = ArtistArtworkService::new(state.db.clone())
        .replace_artworks(artist_id, &ids_of(&artworks))
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_details(artworks).await?))
}

pub async fn remove_artwork(
    State(state): State<AppState>,
    Path((artist_id, artwork_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    ArtistArtworkService::new(state.db.clone())
        .remove_artwork(artist_id, artwork_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// Countries

pub async fn replace_birth_country(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
    Json(country): Json<IdRef>,
) -> Result<Json<ArtistDetailDto>> {
    let artist = ArtistCountryService::new(state.db.clone())
        .replace_birth_country(artist_id, country.id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_detail(artist).await?))
}

pub async fn replace_death_country(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
    Json(country): Json<IdRef>,
) -> Result<Json<ArtistDetailDto>> {
    let artist = ArtistCountryService::new(state.db.clone())
        .replace_death_country(artist_id, country.id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_detail(artist).await?))
}
