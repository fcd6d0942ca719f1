use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    dto::{
        ids_of, ArtistDetailDto, ArtworkDetailDto, DtoAssembler, IdRef, MovementDetailDto,
        MovementDto, MovementPayload, MuseumDetailDto,
    },
    error::Result,
    services::{
        MovementArtistService, MovementArtworkService, MovementCountryService,
        MovementMuseumService, MovementService,
    },
    state::AppState,
};

pub async fn create_movement(
    State(state): State<AppState>,
    Json(payload): Json<MovementPayload>,
) -> Result<(StatusCode, Json<MovementDto>)> {
    let movement = MovementService::new(state.db.clone()).create(payload).await?;
    let dto = DtoAssembler::new(&state.db).movement(movement).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_movements(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovementDetailDto>>> {
    let movements = MovementService::new(state.db.clone()).get_all().await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_details(movements).await?))
}

pub async fn get_movement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovementDetailDto>> {
    let movement = MovementService::new(state.db.clone()).get(id).await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_detail(movement).await?))
}

pub async fn update_movement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MovementPayload>,
) -> Result<Json<MovementDto>> {
    let movement = MovementService::new(state.db.clone()).update(id, payload).await?;
    Ok(Json(DtoAssembler::new(&state.db).movement(movement).await?))
}

pub async fn delete_movement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    MovementService::new(state.db.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Artists

pub async fn add_artist(
    State(state): State<AppState>,
    Path((movement_id, artist_id)): Path<(i32, i32)>,
) -> Result<Json<ArtistDetailDto>> {
    let artist = MovementArtistService::new(state.db.clone())
        .add_artist(movement_id, artist_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_detail(artist).await?))
}

pub async fn list_artists(
    State(state): State<AppState>,
    Path(movement_id): Path<i32>,
) -> Result<Json<Vec<ArtistDetailDto>>> {
    let artists = MovementArtistService::new(state.db.clone())
        .get_artists(movement_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_details(artists).await?))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path((movement_id, artist_id)): Path<(i32, i32)>,
) -> Result<Json<ArtistDetailDto>> {
    let artist = MovementArtistService::new(state.db.clone())
        .get_artist(movement_id, artist_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_detail(artist).await?))
}

pub async fn replace_artists(
    State(state): State<AppState>,
    Path(movement_id): Path<i32>,
    Json(artists): Json<Vec<IdRef>>,
) -> Result<Json<Vec<ArtistDetailDto>>> {
    let artists = MovementArtistService::new(state.db.clone())
        .replace_artists(movement_id, &ids_of(&artists))
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_details(artists).await?))
}

pub async fn remove_artist(
    State(state): State<AppState>,
    Path((movement_id, artist_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    MovementArtistService::new(state.db.clone())
        .remove_artist(movement_id, artist_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// Museums

pub async fn add_museum(
    State(state): State<AppState>,
    Path((movement_id, museum_id)): Path<(i32, i32)>,
) -> Result<Json<MuseumDetailDto>> {
    let museum = MovementMuseumService::new(state.db.clone())
        .add_museum(movement_id, museum_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_detail(museum).await?))
}

pub async fn list_museums(
    State(state): State<AppState>,
    Path(movement_id): Path<i32>,
) -> Result<Json<Vec<MuseumDetailDto>>> {
    let museums = MovementMuseumService::new(state.db.clone())
        .get_museums(movement_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_details(museums).await?))
}

pub async fn get_museum(
    State(state): State<AppState>,
    Path((movement_id, museum_id)): Path<(i32, i32)>,
) -> Result<Json<MuseumDetailDto>> {
    let museum = MovementMuseumService::new(state.db.clone())
        .get_museum(movement_id, museum_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_detail(museum).await?))
}

pub async fn replace_museums(
    State(state): State<AppState>,
    Path(movement_id): Path<i32>,
    Json(museums): Json<Vec<IdRef>>,
) -> Result<Json<Vec<MuseumDetailDto>>> {
    let museums = MovementMuseumService::new(state.db.clone())
        .replace_museums(movement_id, &ids_of(&museums))
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_details(museums).await?))
}

pub async fn remove_museum(
    State(state): State<AppState>,
    Path((movement_id, museum_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    MovementMuseumService::new(state.db.clone())
        .remove_museum(movement_id, museum_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// Artworks

pub async fn add_artwork(
    State(state): State<AppState>,
    Path((movement_id, artwork_id)): Path<(i32, i32)>,
) -> Result<Json<ArtworkDetailDto>> {
    let artwork = MovementArtworkService::new(state.db.clone())
        .add_artwork(movement_id, artwork_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_detail(artwork).await?))
}

pub async fn list_artworks(
    State(state): State<AppState>,
    Path(movement_id): Path<i32>,
) -> Result<Json<Vec<ArtworkDetailDto>>> {
    let artworks = MovementArtworkService::new(state.db.clone())
        .get_artworks(movement_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_details(artworks).await?))
}

pub async fn get_artwork(
    State(state): State<AppState>,
    Path((movement_id, artwork_id)): Path<(i32, i32)>,
) -> Result<Json<ArtworkDetailDto>> {
    let artwork = MovementArtworkService::new(state.db.clone())
        .get_artwork(movement_id, artwork_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_detail(artwork).await?))
}

pub async fn replace_artworks(
    State(state): State<AppState>,
    Path(movement_id): Path<i32>,
    Json(artworks): Json<Vec<IdRef>>,
) -> Result<Json<Vec<ArtworkDetailDto>>> {
    let artworks = MovementArtworkService::new(state.db.clone())
        .replace_artworks(movement_id, &ids_of(&artworks))
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_details(artworks).await?))
}

pub async fn remove_artwork(
    State(state): State<AppState>,
    Path((movement_id, artwork_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    MovementArtworkService::new(state.db.clone())
        .remove_artwork(movement_id, artwork_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// Origin country

pub async fn replace_origin_country(
    State(state): State<AppState>,
    Path(movement_id): Path<i32>,
    Json(country): Json<IdRef>,
) -> Result<Json<MovementDetailDto>> {
    let movement = MovementCountryService::new(state.db.clone())
        .replace_country(movement_id, country.id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_detail(movement).await?))
}

pub async fn remove_origin_country(
    State(state): State<AppState>,
    Path(movement_id): Path<i32>,
) -> Result<StatusCode> {
    MovementCountryService::new(state.db.clone())
        .remove_country(movement_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
