pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::authors::dto::{AuthorDto, AuthorPayload};
use crate::core::bookstore::BookstoreResult;

#[async_trait]
pub trait AuthorService: Sync + Send {
    async fn add_author(&self, author: &AuthorPayload) -> BookstoreResult<AuthorDto>;
    async fn update_author(&self, author_id: i64, author: &AuthorPayload) -> BookstoreResult<AuthorDto>;
    async fn find_author_by_id(&self, author_id: i64) -> BookstoreResult<AuthorDto>;
    async fn list_authors(&self) -> BookstoreResult<Vec<AuthorDto>>;
}
