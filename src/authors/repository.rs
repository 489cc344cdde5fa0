pub mod sqlite_author_repository;

use async_trait::async_trait;
use crate::authors::domain::model::{AuthorEntity, NewAuthor};
use crate::core::bookstore::BookstoreResult;

#[async_trait]
pub trait AuthorRepository: Sync + Send {
    // create an author and return it with its store-assigned id
    async fn create(&self, author: &NewAuthor) -> BookstoreResult<AuthorEntity>;

    // fully replace an author
    async fn update(&self, author_id: i64, author: &NewAuthor) -> BookstoreResult<AuthorEntity>;

    // get an author
    async fn get(&self, author_id: i64) -> BookstoreResult<AuthorEntity>;

    // all authors in ascending id order
    async fn query_all(&self) -> BookstoreResult<Vec<AuthorEntity>>;
}
