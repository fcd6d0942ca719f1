use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    dto::{CityDto, CityPayload, CountryDetailDto, DtoAssembler},
    error::Result,
    services::{CityCountryService, CityService},
    state::AppState,
};

pub async fn create_city(
    State(state): State<AppState>,
    Json(payload): Json<CityPayload>,
) -> Result<(StatusCode, Json<CityDto>)> {
    let city = CityService::new(state.db.clone()).create(payload).await?;
    let dto = DtoAssembler::new(&state.db).city(city).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_cities(State(state): State<AppState>) -> Result<Json<Vec<CityDto>>> {
    let cities = CityService::new(state.db.clone()).get_all().await?;
    Ok(Json(DtoAssembler::new(&state.db).cities(cities).await?))
}

pub async fn get_city(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<CityDto>> {
    let city = CityService::new(state.db.clone()).get(id).await?;
    Ok(Json(DtoAssembler::new(&state.db).city(city).await?))
}

pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CityPayload>,
) -> Result<Json<CityDto>> {
    let city = CityService::new(state.db.clone()).update(id, payload).await?;
    Ok(Json(DtoAssembler::new(&state.db).city(city).await?))
}

pub async fn delete_city(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode> {
    CityService::new(state.db.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_country(
    State(state): State<AppState>,
    Path((city_id, country_id)): Path<(i32, i32)>,
) -> Result<Json<CountryDetailDto>> {
    let country = CityCountryService::new(state.db.clone())
        .add_country(city_id, country_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).country_detail(country).await?))
}

pub async fn get_country(
    State(state): State<AppState>,
    Path((city_id, country_id)): Path<(i32, i32)>,
) -> Result<Json<CountryDetailDto>> {
    let country = CityCountryService::new(state.db.clone())
        .get_country(city_id, country_id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).country_detail(country).await?))
}

pub async fn remove_country(
    State(state): State<AppState>,
    Path((city_id, country_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    CityCountryService::new(state.db.clone())
        .remove_country(city_id, country_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
