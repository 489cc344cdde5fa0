use async_trait::async_trait;

use crate::authors::dto::AuthorDto;
use crate::authors::repository::AuthorRepository;
use crate::books::domain::model::{BookWithAuthor, NewBook};
use crate::books::dto::{BookDto, BookPayload};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::bookstore::{BookstoreError, BookstoreResult};
use crate::core::domain::Configuration;
use crate::core::pagination::PageRequest;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    author_repository: Box<dyn AuthorRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>,
                      author_repository: Box<dyn AuthorRepository>) -> Self {
        Self {
            book_repository,
            author_repository,
        }
    }

    // Writes are validated before anything touches the store: the title must
    // not be blank and the referenced author must exist. The count is stored
    // verbatim, full-replace writes are allowed to set any value.
    async fn validate_book(&self, book: &BookPayload) -> BookstoreResult<NewBook> {
        if book.title.trim().is_empty() {
            return Err(BookstoreError::validation(
                "title must not be blank", Some("title".to_string())));
        }
        self.author_repository.get(book.author_id).await.map_err(|err| match err {
            BookstoreError::NotFound { .. } => BookstoreError::validation(
                format!("author {} does not exist", book.author_id).as_str(),
                Some("author_id".to_string())),
            other => other,
        })?;
        Ok(NewBook::new(book.title.as_str(), book.author_id, book.count))
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookPayload) -> BookstoreResult<BookDto> {
        let new_book = self.validate_book(book).await?;
        let saved = self.book_repository.create(&new_book).await?;
        Ok(BookDto::from(&saved))
    }

    async fn update_book(&self, book_id: i64, book: &BookPayload) -> BookstoreResult<BookDto> {
        let new_book = self.validate_book(book).await?;
        let saved = self.book_repository.update(book_id, &new_book).await?;
        Ok(BookDto::from(&saved))
    }

    async fn find_book_by_id(&self, book_id: i64) -> BookstoreResult<BookDto> {
        self.book_repository.get(book_id).await.map(|b| BookDto::from(&b))
    }

    async fn list_books(&self, author_id: Option<i64>,
                        page_request: &PageRequest) -> BookstoreResult<(usize, Vec<BookDto>)> {
        let total = self.book_repository.count_all(author_id).await?;
        page_request.validate(total)?;
        let records = self.book_repository.query(
            author_id, page_request.page_size, page_request.offset()).await?;
        Ok((total, records.iter().map(BookDto::from).collect()))
    }

    async fn buy_book(&self, book_id: i64) -> BookstoreResult<()> {
        match self.book_repository.decrement_count(book_id).await {
            Ok(()) => {
                tracing::info!("book {} bought", book_id);
                Ok(())
            }
            Err(err) => {
                if matches!(err, BookstoreError::OutOfStock { .. }) {
                    tracing::info!("rejected purchase of sold out book {}", book_id);
                }
                Err(err)
            }
        }
    }
}

impl From<&BookWithAuthor> for BookDto {
    fn from(other: &BookWithAuthor) -> Self {
        Self {
            id: other.book.book_id,
            title: other.book.title.to_string(),
            author: AuthorDto::from(&other.author),
            count: other.book.count,
        }
    }
}
