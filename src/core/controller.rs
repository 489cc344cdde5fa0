use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use crate::core::bookstore::BookstoreError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub conn: libsql::Connection,
}

impl AppState {
    pub fn new(config: Configuration, conn: libsql::Connection) -> AppState {
        AppState {
            config,
            conn,
        }
    }
}

// Every error crosses the wire as {"error": "..."}.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub type ServerError = (StatusCode, Json<ErrorResponse>);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: format!("{}", err) }))
}

impl From<BookstoreError> for ServerError {
    fn from(err: BookstoreError) -> Self {
        match err {
            BookstoreError::Database { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: message }))
            }
            BookstoreError::DuplicateKey { message } => {
                (StatusCode::CONFLICT, Json(ErrorResponse { error: message }))
            }
            BookstoreError::NotFound { message } => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message }))
            }
            BookstoreError::OutOfStock { message } => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
            }
            BookstoreError::InvalidPageSize { message } => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
            }
            BookstoreError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
            }
            BookstoreError::Serialization { message } => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
            }
            BookstoreError::Runtime { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: message }))
            }
        }
    }
}
