pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, BookPayload};
use crate::core::bookstore::BookstoreResult;
use crate::core::pagination::PageRequest;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookPayload) -> BookstoreResult<BookDto>;
    async fn update_book(&self, book_id: i64, book: &BookPayload) -> BookstoreResult<BookDto>;
    async fn find_book_by_id(&self, book_id: i64) -> BookstoreResult<BookDto>;
    // one validated listing window plus the total count of matching books
    async fn list_books(&self, author_id: Option<i64>,
                        page_request: &PageRequest) -> BookstoreResult<(usize, Vec<BookDto>)>;
    async fn buy_book(&self, book_id: i64) -> BookstoreResult<()>;
}
