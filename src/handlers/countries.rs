use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    dto::{CountryDetailDto, CountryDto, CountryPayload, DtoAssembler},
    error::Result,
    services::CountryService,
    state::AppState,
};

pub async fn create_country(
    State(state): State<AppState>,
    Json(payload): Json<CountryPayload>,
) -> Result<(StatusCode, Json<CountryDto>)> {
    let country = CountryService::new(state.db.clone()).create(payload).await?;
    Ok((StatusCode::CREATED, Json(CountryDto::from(country))))
}

pub async fn list_countries(State(state): State<AppState>) -> Result<Json<Vec<CountryDetailDto>>> {
    let countries = CountryService::new(state.db.clone()).get_all().await?;
    Ok(Json(DtoAssembler::new(&state.db).country_details(countries).await?))
}

pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CountryDetailDto>> {
    let country = CountryService::new(state.db.clone()).get(id).await?;
    Ok(Json(DtoAssembler::new(&state.db).country_detail(country).await?))
}

pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CountryPayload>,
) -> Result<Json<CountryDto>> {
    let country = CountryService::new(state.db.clone()).update(id, payload).await?;
    Ok(Json(CountryDto::from(country)))
}

pub async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    CountryService::new(state.db.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
