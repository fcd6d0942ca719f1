use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    dto::{
        ids_of, ArtistDetailDto, ArtworkDetailDto, DtoAssembler, IdRef, MovementDetailDto,
        MuseumDetailDto, MuseumDto, MuseumPayload,
    },
    error::Result,
    services::{
        MuseumArtistService, MuseumArtworkService, MuseumCountryService, MuseumMovementService,
        MuseumService,
    },
    state::AppState,
};

pub async fn create_museum(
    State(state): State<AppState>,
    Json(payload): Json<MuseumPayload>,
) -> Result<(StatusCode, Json<MuseumDto>)> {
    let museum = MuseumService::new(state.db.clone()).create(payload).await?;
    let dto = DtoAssembler::new(&state.db).museum(museum).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_museums(State(state): State<AppState>) -> Result<Json<Vec<MuseumDetailDto>>> {
    let museums = MuseumService::new(state.db.clone()).get_all().await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_details(museums).await?))
}

pub async fn get_museum(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MuseumDetailDto>> {
    let museum = MuseumService::new(state.db.clone()).get(id).await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_detail(museum).await?))
}

pub async fn update_museum(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MuseumPayload>,
) -> Result<Json<MuseumDto>> {
    let museum = MuseumService::new(state.db.clone()).update(id, payload).await?;
    Ok(Json(DtoAssembler::new(&state.db).museum(museum).await?))
}

pub async fn delete_museum(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    MuseumService::new(state.db.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Artists

pub async fn add_artist(
    State(state): State<AppState>,
    Path((museum_id, artist_id)): Path<(i32, i32)>,
) -> Result<Json<ArtistDetailDto>> {
    let artist = MuseumArtistService::new(state.db.clone())
        .add_artist(museum_id, artist_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_detail(artist).await?))
}

pub async fn list_artists(
    State(state): State<AppState>,
    Path(museum_id): Path<i32>,
) -> Result<Json<Vec<ArtistDetailDto>>> {
    let artists = MuseumArtistService::new(state.db.clone())
        .get_artists(museum_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_details(artists).await?))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path((museum_id, artist_id)): Path<(i32, i32)>,
) -> Result<Json<ArtistDetailDto>> {
    let artist = MuseumArtistService::new(state.db.clone())
        .get_artist(museum_id, artist_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_detail(artist).await?))
}

pub async fn replace_artists(
    State(state): State<AppState>,
    Path(museum_id): Path<i32>,
    Json(artists): Json<Vec<IdRef>>,
) -> Result<Json<Vec<ArtistDetailDto>>> {
    let artists = MuseumArtistService::new(state.db.clone())
        .replace_artists(museum_id, &ids_of(&artists))
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_details(artists).await?))
}

pub async fn remove_artist(
    State(state): State<AppState>,
    Path((museum_id, artist_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    MuseumArtistService::new(state.db.clone())
        .remove_artist(museum_id, artist_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// Movements

pub async fn add_movement(
    State(state): State<AppState>,
    Path((museum_id, movement_id)): Path<(i32, i32)>,
) -> Result<Json<MovementDetailDto>> {
    let movement = MuseumMovementService::new(state.db.clone())
        .add_movement(museum_id, movement_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_detail(movement).await?))
}

pub async fn list_movements(
    State(state): State<AppState>,
    Path(museum_id): Path<i32>,
) -> Result<Json<Vec<MovementDetailDto>>> {
    let movements = MuseumMovementService::new(state.db.clone())
        .get_movements(museum_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_details(movements).await?))
}

pub async fn get_movement(
    State(state): State<AppState>,
    Path((museum_id, movement_id)): Path<(i32, i32)>,
) -> Result<Json<MovementDetailDto>> {
    let movement = MuseumMovementService::new(state.db.clone())
        .get_movement(museum_id, movement_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_detail(movement).await?))
}

pub async fn replace_movements(
    State(state): State<AppState>,
    Path(museum_id): Path<i32>,
    Json(movements): Json<Vec<IdRef>>,
) -> Result<Json<Vec<MovementDetailDto>>> {
    let movements = MuseumMovementService::new(state.db.clone())
        .replace_movements(museum_id, &ids_of(&movements))
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_details(movements).await?))
}

pub async fn remove_movement(
    State(state): State<AppState>,
    Path((museum_id, movement_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    MuseumMovementService::new(state.db.clone())
        .remove_movement(museum_id, movement_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// Artworks

pub async fn add_artwork(
    State(state): State<AppState>,
    Path((museum_id, artwork_id)): Path<(i32, i32)>,
) -> Result<Json<ArtworkDetailDto>> {
    let artwork = MuseumArtworkService::new(state.db.clone())
        .add_artwork(museum_id, artwork_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_detail(artwork).await?))
}

pub async fn list_artworks(
    State(state): State<AppState>,
    Path(museum_id): Path<i32>,
) -> Result<Json<Vec<ArtworkDetailDto>>> {
    let artworks = MuseumArtworkService::new(state.db.clone())
        .get_artworks(museum_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_details(artworks).await?))
}

pub async fn get_artwork(
    State(state): State<AppState>,
    Path((museum_id, artwork_id)): Path<(i32, i32)>,
) -> Result<Json<ArtworkDetailDto>> {
    let artwork = MuseumArtworkService::new(state.db.clone())
        .get_artwork(museum_id, artwork_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_detail(artwork).await?))
}

pub async fn replace_artworks(
    State(state): State<AppState>,
    Path(museum_id): Path<i32>,
    Json(artworks): Json<Vec<IdRef>>,
) -> Result<Json<Vec<ArtworkDetailDto>>> {
    let artworks = MuseumArtworkService::new(state.db.clone())
        .replace_artworks(museum_id, &ids_of(&artworks))
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_details(artworks).await?))
}

pub async fn remove_artwork(
    State(state): State<AppState>,
    Path((museum_id, artwork_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    MuseumArtworkService::new(state.db.clone())
        .remove_artwork(museum_id, artwork_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// Location

pub async fn replace_location(
    State(state): State<AppState>,
    Path(museum_id): Path<i32>,
    Json(country): Json<IdRef>,
) -> Result<Json<MuseumDetailDto>> {
    let museum = MuseumCountryService::new(state.db.clone())
        .replace_country(museum_id, country.id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_detail(museum).await?))
}

pub async fn remove_location(
    State(state): State<AppState>,
    Path(museum_id): Path<i32>,
) -> Result<StatusCode> {
    MuseumCountryService::new(state.db.clone())
        .remove_country(museum_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
