pub mod sqlite_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::{BookWithAuthor, NewBook};
use crate::core::bookstore::BookstoreResult;

#[async_trait]
pub trait BookRepository: Sync + Send {
    // create a book and return it joined with its author
    async fn create(&self, book: &NewBook) -> BookstoreResult<BookWithAuthor>;

    // fully replace a book
    async fn update(&self, book_id: i64, book: &NewBook) -> BookstoreResult<BookWithAuthor>;

    // get a book joined with its author
    async fn get(&self, book_id: i64) -> BookstoreResult<BookWithAuthor>;

    // one listing window in ascending id order, optionally filtered by author
    async fn query(&self, author_id: Option<i64>,
                   limit: usize, offset: usize) -> BookstoreResult<Vec<BookWithAuthor>>;

    // total number of books matching the same filter as query
    async fn count_all(&self, author_id: Option<i64>) -> BookstoreResult<usize>;

    // the purchase write: atomically take one copy off the shelf, failing
    // with OutOfStock when none are left and NotFound when the book is absent
    async fn decrement_count(&self, book_id: i64) -> BookstoreResult<()>;
}
