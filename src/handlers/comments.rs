use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    dto::{CommentDto, CommentPayload, DtoAssembler, IdRef},
    error::Result,
    services::{CommentArtworkService, CommentService},
    state::AppState,
};

pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CommentPayload>,
) -> Result<(StatusCode, Json<CommentDto>)> {
    let comment = CommentService::new(state.db.clone()).create(payload).await?;
    let dto = DtoAssembler::new(&state.db).comment(comment).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_comments(State(state): State<AppState>) -> Result<Json<Vec<CommentDto>>> {
    let comments = CommentService::new(state.db.clone()).get_all().await?;
    Ok(Json(DtoAssembler::new(&state.db).comments(comments).await?))
}

pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CommentDto>> {
    let comment = CommentService::new(state.db.clone()).get(id).await?;
    Ok(Json(DtoAssembler::new(&state.db).comment(comment).await?))
}

pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CommentPayload>,
) -> Result<Json<CommentDto>> {
    let comment = CommentService::new(state.db.clone()).update(id, payload).await?;
    Ok(Json(DtoAssembler::new(&state.db).comment(comment).await?))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    CommentService::new(state.db.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn replace_artwork(
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
    Json(artwork): Json<IdRef>,
) -> Result<Json<CommentDto>> {
    let comment = CommentArtworkService::new(state.db.clone())
        .replace_artwork(comment_id, artwork.id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).comment(comment).await?))
}

pub async fn remove_artwork(
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
) -> Result<StatusCode> {
    CommentArtworkService::new(state.db.clone())
        .remove_artwork(comment_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
