use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::authors::domain::AuthorService;
use crate::authors::dto::{AuthorDto, AuthorPayload};
use crate::authors::factory;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

fn build_service(state: &AppState) -> Box<dyn AuthorService> {
    factory::create_author_service(&state.config, state.conn.clone())
}

pub(crate) async fn list_authors(
    State(state): State<AppState>) -> Result<Json<Vec<AuthorDto>>, ServerError> {
    let svc = build_service(&state);
    let res = svc.list_authors().await?;
    Ok(Json(res))
}

pub(crate) async fn add_author(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<AuthorDto>), ServerError> {
    let req: AuthorPayload = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = svc.add_author(&req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_author_by_id(
    State(state): State<AppState>,
    Path(author_id): Path<i64>) -> Result<Json<AuthorDto>, ServerError> {
    let svc = build_service(&state);
    let res = svc.find_author_by_id(author_id).await?;
    Ok(Json(res))
}

pub(crate) async fn update_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    json: Json<Value>) -> Result<Json<AuthorDto>, ServerError> {
    let req: AuthorPayload = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = svc.update_author(author_id, &req).await?;
    Ok(Json(res))
}
