use async_trait::async_trait;

use crate::authors::domain::AuthorService;
use crate::authors::domain::model::{AuthorEntity, NewAuthor};
use crate::authors::dto::{AuthorDto, AuthorPayload};
use crate::authors::repository::AuthorRepository;
use crate::core::bookstore::{BookstoreError, BookstoreResult};
use crate::core::domain::Configuration;

pub(crate) struct AuthorServiceImpl {
    author_repository: Box<dyn AuthorRepository>,
}

impl AuthorServiceImpl {
    pub(crate) fn new(_config: &Configuration, author_repository: Box<dyn AuthorRepository>) -> Self {
        AuthorServiceImpl {
            author_repository,
        }
    }
}

// Both name fields are required and must carry visible characters, matching
// the write contract of the authors API.
fn validate_author(author: &AuthorPayload) -> BookstoreResult<NewAuthor> {
    if author.first_name.trim().is_empty() {
        return Err(BookstoreError::validation(
            "first_name must not be blank", Some("first_name".to_string())));
    }
    if author.last_name.trim().is_empty() {
        return Err(BookstoreError::validation(
            "last_name must not be blank", Some("last_name".to_string())));
    }
    Ok(NewAuthor::new(author.first_name.as_str(), author.last_name.as_str()))
}

#[async_trait]
impl AuthorService for AuthorServiceImpl {
    async fn add_author(&self, author: &AuthorPayload) -> BookstoreResult<AuthorDto> {
        let new_author = validate_author(author)?;
        let saved = self.author_repository.create(&new_author).await?;
        Ok(AuthorDto::from(&saved))
    }

    async fn update_author(&self, author_id: i64, author: &AuthorPayload) -> BookstoreResult<AuthorDto> {
        let new_author = validate_author(author)?;
        let saved = self.author_repository.update(author_id, &new_author).await?;
        Ok(AuthorDto::from(&saved))
    }

    async fn find_author_by_id(&self, author_id: i64) -> BookstoreResult<AuthorDto> {
        self.author_repository.get(author_id).await.map(|a| AuthorDto::from(&a))
    }

    async fn list_authors(&self) -> BookstoreResult<Vec<AuthorDto>> {
        let res = self.author_repository.query_all().await?;
        Ok(res.iter().map(AuthorDto::from).collect())
    }
}

impl From<&AuthorEntity> for AuthorDto {
    fn from(other: &AuthorEntity) -> Self {
        Self {
            id: other.author_id,
            first_name: other.first_name.to_string(),
            last_name: other.last_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::authors::dto::AuthorPayload;
    use crate::authors::domain::AuthorService;
    use crate::authors::factory;
    use crate::core::bookstore::BookstoreError;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::utils::db::connect;

    async fn test_service() -> Box<dyn AuthorService> {
        let config = Configuration::new(":memory:");
        let conn = connect(&config, RepositoryStore::InMemory).await
            .expect("should connect");
        factory::create_author_service(&config, conn)
    }

    #[tokio::test]
    async fn test_should_add_author() {
        let author_svc = test_service().await;

        let author = author_svc.add_author(&AuthorPayload::new("Terry", "Pratchett")).await
            .expect("should add author");

        let loaded = author_svc.find_author_by_id(author.id).await
            .expect("should return author");
        assert_eq!(author, loaded);
    }

    #[tokio::test]
    async fn test_should_update_author() {
        let author_svc = test_service().await;

        let author = author_svc.add_author(&AuthorPayload::new("Terry", "Pratchet")).await
            .expect("should add author");

        let updated = author_svc.update_author(
            author.id, &AuthorPayload::new("Terry", "Pratchett")).await
            .expect("should update author");
        assert_eq!("Pratchett", updated.last_name.as_str());

        let loaded = author_svc.find_author_by_id(author.id).await
            .expect("should return author");
        assert_eq!("Pratchett", loaded.last_name.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_blank_names() {
        let author_svc = test_service().await;

        let res = author_svc.add_author(&AuthorPayload::new("  ", "Pratchett")).await;
        assert!(matches!(res, Err(BookstoreError::Validation { message: _, reason_code: _ })));

        let res = author_svc.add_author(&AuthorPayload::new("Terry", "")).await;
        assert!(matches!(res, Err(BookstoreError::Validation { message: _, reason_code: _ })));

        let all = author_svc.list_authors().await.expect("should list authors");
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_should_list_authors() {
        let author_svc = test_service().await;

        author_svc.add_author(&AuthorPayload::new("Ursula", "Le Guin")).await
            .expect("should add author");
        author_svc.add_author(&AuthorPayload::new("Iain", "Banks")).await
            .expect("should add author");

        let all = author_svc.list_authors().await.expect("should list authors");
        assert_eq!(2, all.len());
        assert!(all[0].id < all[1].id);
    }

    #[tokio::test]
    async fn test_should_fail_finding_unknown_author() {
        let author_svc = test_service().await;
        let res = author_svc.find_author_by_id(42).await;
        assert!(matches!(res, Err(BookstoreError::NotFound { message: _ })));
    }
}
