use axum::{
    routing::{get, post},
    Router,
};

use crate::authors::controller::{add_author, find_author_by_id, list_authors, update_author};
use crate::catalog::controller::{add_book, buy_book, find_book_by_id, list_books, update_book};
use crate::core::controller::AppState;

pub(crate) async fn healthz() -> &'static str {
    "OK"
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/authors/", get(list_authors).post(add_author))
        .route("/authors/:id/", get(find_author_by_id).put(update_author))
        .route("/books/", get(list_books).post(add_book))
        .route("/books/:id/", get(find_book_by_id).put(update_book))
        .route("/books/:id/buy/", post(buy_book))
        .with_state(state)
}
