use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::books::dto::{BookDto, BookPayload};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::bookstore::{BookstoreError, BookstoreResult};
use crate::core::controller::{AppState, json_to_server_error, MessageResponse, ServerError};
use crate::core::pagination::{PageRequest, PaginatedResponse};

const BOOKS_PATH: &str = "/books/";

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.conn.clone())
}

// The author filter is an exact id match. Anything that is not an integer
// is rejected rather than silently matching nothing.
fn parse_author_filter(raw: Option<&String>) -> BookstoreResult<Option<i64>> {
    match raw {
        Some(raw) => raw.parse::<i64>().map(Some).map_err(|_| {
            BookstoreError::validation("Invalid author filter", Some("author".to_string()))
        }),
        None => Ok(None),
    }
}

pub(crate) async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<PaginatedResponse<BookDto>>, ServerError> {
    let author_id = parse_author_filter(params.get("author"))?;
    let page_request = PageRequest::from_params(
        params.get("page").map(String::as_str),
        params.get("page_size").map(String::as_str),
        state.config.default_page_size,
        state.config.max_page_size)?;
    let svc = build_service(&state);
    let (total, records) = svc.list_books(author_id, &page_request).await?;
    let mut extra_params = Vec::new();
    if let Some(author_id) = author_id {
        extra_params.push(("author", author_id.to_string()));
    }
    Ok(Json(PaginatedResponse::new(BOOKS_PATH, &page_request, total, &extra_params, records)))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<BookDto>), ServerError> {
    let req: BookPayload = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = svc.add_book(&req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<BookDto>, ServerError> {
    let svc = build_service(&state);
    let res = svc.find_book_by_id(book_id).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    json: Json<Value>) -> Result<Json<BookDto>, ServerError> {
    let req: BookPayload = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = svc.update_book(book_id, &req).await?;
    Ok(Json(res))
}

pub(crate) async fn buy_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<MessageResponse>, ServerError> {
    let svc = build_service(&state);
    svc.buy_book(book_id).await?;
    Ok(Json(MessageResponse { message: "Book bought successfully".to_string() }))
}
