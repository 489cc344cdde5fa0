use async_trait::async_trait;
use chrono::Utc;

use crate::authors::domain::model::{AuthorEntity, NewAuthor};
use crate::authors::repository::AuthorRepository;
use crate::core::bookstore::{BookstoreError, BookstoreResult};
use crate::utils::date::{format_date, parse_date};

const SELECT_COLS: &str = "author_id, first_name, last_name, created_at, updated_at";

pub struct SqliteAuthorRepository {
    conn: libsql::Connection,
}

impl SqliteAuthorRepository {
    pub(crate) fn new(conn: libsql::Connection) -> Self {
        Self { conn }
    }
}

fn row_to_author(row: &libsql::Row) -> BookstoreResult<AuthorEntity> {
    Ok(AuthorEntity {
        author_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        created_at: parse_date(row.get::<String>(3)?.as_str())?,
        updated_at: parse_date(row.get::<String>(4)?.as_str())?,
    })
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn create(&self, author: &NewAuthor) -> BookstoreResult<AuthorEntity> {
        let now = format_date(Utc::now().naive_utc());
        let mut rows = self.conn.query(
            format!("INSERT INTO authors (first_name, last_name, created_at, updated_at) \
                     VALUES (?1, ?2, ?3, ?4) RETURNING {}", SELECT_COLS).as_str(),
            libsql::params![author.first_name.as_str(), author.last_name.as_str(),
                now.as_str(), now.as_str()]).await?;
        let row = rows.next().await?.ok_or_else(|| BookstoreError::database(
            "insert into authors returned no row", None, false))?;
        row_to_author(&row)
    }

    async fn update(&self, author_id: i64, author: &NewAuthor) -> BookstoreResult<AuthorEntity> {
        let now = format_date(Utc::now().naive_utc());
        let affected = self.conn.execute(
            "UPDATE authors SET first_name = ?2, last_name = ?3, updated_at = ?4 \
             WHERE author_id = ?1",
            libsql::params![author_id, author.first_name.as_str(),
                author.last_name.as_str(), now.as_str()]).await?;
        if affected == 0 {
            return Err(BookstoreError::not_found(
                format!("author {} not found", author_id).as_str()));
        }
        self.get(author_id).await
    }

    async fn get(&self, author_id: i64) -> BookstoreResult<AuthorEntity> {
        let mut rows = self.conn.query(
            format!("SELECT {} FROM authors WHERE author_id = ?1", SELECT_COLS).as_str(),
            [author_id]).await?;
        match rows.next().await? {
            Some(row) => row_to_author(&row),
            None => Err(BookstoreError::not_found(
                format!("author {} not found", author_id).as_str())),
        }
    }

    async fn query_all(&self) -> BookstoreResult<Vec<AuthorEntity>> {
        let mut rows = self.conn.query(
            format!("SELECT {} FROM authors ORDER BY author_id", SELECT_COLS).as_str(),
            ()).await?;
        let mut authors = Vec::new();
        while let Some(row) = rows.next().await? {
            authors.push(row_to_author(&row)?);
        }
        Ok(authors)
    }
}

#[cfg(test)]
mod tests {
    use crate::authors::domain::model::NewAuthor;
    use crate::authors::repository::AuthorRepository;
    use crate::authors::repository::sqlite_author_repository::SqliteAuthorRepository;
    use crate::core::bookstore::BookstoreError;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::utils::db::connect;

    async fn test_repository() -> SqliteAuthorRepository {
        let config = Configuration::new(":memory:");
        let conn = connect(&config, RepositoryStore::InMemory).await
            .expect("should connect");
        SqliteAuthorRepository::new(conn)
    }

    #[tokio::test]
    async fn test_should_create_get_author() {
        let repo = test_repository().await;
        let author = repo.create(&NewAuthor::new("Octavia", "Butler")).await
            .expect("should create author");
        assert!(author.author_id > 0);
        assert_eq!("Octavia", author.first_name.as_str());

        let loaded = repo.get(author.author_id).await.expect("should return author");
        assert_eq!(author, loaded);
    }

    #[tokio::test]
    async fn test_should_update_author() {
        let repo = test_repository().await;
        let author = repo.create(&NewAuthor::new("Octavia", "Buttler")).await
            .expect("should create author");

        let updated = repo.update(author.author_id, &NewAuthor::new("Octavia", "Butler")).await
            .expect("should update author");
        assert_eq!("Butler", updated.last_name.as_str());
        assert_eq!(author.author_id, updated.author_id);
        assert_eq!(author.created_at, updated.created_at);
    }

    #[tokio::test]
    async fn test_should_fail_update_of_unknown_author() {
        let repo = test_repository().await;
        let res = repo.update(99, &NewAuthor::new("Nobody", "Home")).await;
        assert!(matches!(res, Err(BookstoreError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_fail_get_of_unknown_author() {
        let repo = test_repository().await;
        let res = repo.get(99).await;
        assert!(matches!(res, Err(BookstoreError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_query_all_authors_in_id_order() {
        let repo = test_repository().await;
        let first = repo.create(&NewAuthor::new("Ursula", "Le Guin")).await
            .expect("should create author");
        let second = repo.create(&NewAuthor::new("Iain", "Banks")).await
            .expect("should create author");

        let all = repo.query_all().await.expect("should list authors");
        assert_eq!(2, all.len());
        assert_eq!(first.author_id, all[0].author_id);
        assert_eq!(second.author_id, all[1].author_id);
    }
}
