use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    dto::{
        ArtistDetailDto, ArtworkDetailDto, ArtworkDto, ArtworkPayload, DtoAssembler,
        MovementDetailDto, MuseumDetailDto,
    },
    error::Result,
    services::{
        ArtworkArtistService, ArtworkMovementService, ArtworkMuseumService, ArtworkService,
    },
    state::AppState,
};

pub async fn create_artwork(
    State(state): State<AppState>,
    Json(payload): Json<ArtworkPayload>,
) -> Result<(StatusCode, Json<ArtworkDto>)> {
    let artwork = ArtworkService::new(state.db.clone()).create(payload).await?;
    let dto = DtoAssembler::new(&state.db).artwork(artwork).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_artworks(State(state): State<AppState>) -> Result<Json<Vec<ArtworkDetailDto>>> {
    let artworks = ArtworkService::new(state.db.clone()).get_all().await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_details(artworks).await?))
}

pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ArtworkDetailDto>> {
    let artwork = ArtworkService::new(state.db.clone()).get(id).await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork_detail(artwork).await?))
}

pub async fn update_artwork(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ArtworkPayload>,
) -> Result<Json<ArtworkDto>> {
    let artwork = ArtworkService::new(state.db.clone()).update(id, payload).await?;
    Ok(Json(DtoAssembler::new(&state.db).artwork(artwork).await?))
}

pub async fn delete_artwork(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    ArtworkService::new(state.db.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_artist(
    State(state): State<AppState>,
    Path((artwork_id, artist_id)): Path<(i32, i32)>,
) -> Result<Json<ArtistDetailDto>> {
    let artist = ArtworkArtistService::new(state.db.clone())
        .add_artist(artwork_id, artist_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_detail(artist).await?))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path((artwork_id, artist_id)): Path<(i32, i32)>,
) -> Result<Json<ArtistDetailDto>> {
    let artist = ArtworkArtistService::new(state.db.clone())
        .get_artist(artwork_id, artist_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).artist_detail(artist).await?))
}

pub async fn remove_artist(
    State(state): State<AppState>,
    Path((artwork_id, artist_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    ArtworkArtistService::new(state.db.clone())
        .remove_artist(artwork_id, artist_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_museum(
    State(state): State<AppState>,
    Path((artwork_id, museum_id)): Path<(i32, i32)>,
) -> Result<Json<MuseumDetailDto>> {
    let museum = ArtworkMuseumService::new(state.db.clone())
        .add_museum(artwork_id, museum_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_detail(museum).await?))
}

pub async fn get_museum(
    State(state): State<AppState>,
    Path((artwork_id, museum_id)): Path<(i32, i32)>,
) -> Result<Json<MuseumDetailDto>> {
    let museum = ArtworkMuseumService::new(state.db.clone())
        .get_museum(artwork_id, museum_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).museum_detail(museum).await?))
}

pub async fn remove_museum(
    State(state): State<AppState>,
    Path((artwork_id, museum_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    ArtworkMuseumService::new(state.db.clone())
        .remove_museum(artwork_id, museum_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_movement(
    State(state): State<AppState>,
    Path((artwork_id, movement_id)): Path<(i32, i32)>,
) -> Result<Json<MovementDetailDto>> {
    let movement = ArtworkMovementService::new(state.db.clone())
        .add_movement(artwork_id, movement_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_detail(movement).await?))
}

pub async fn get_movement(
    State(state): State<AppState>,
    Path((artwork_id, movement_id)): Path<(i32, i32)>,
) -> Result<Json<MovementDetailDto>> {
    let movement = ArtworkMovementService::new(state.db.clone())
        .get_movement(artwork_id, movement_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).movement_detail(movement).await?))
}

pub async fn remove_movement(
    State(state): State<AppState>,
    Path((artwork_id, movement_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    ArtworkMovementService::new(state.db.clone())
        .remove_movement(artwork_id, movement_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
