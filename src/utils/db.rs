use libsql::Builder;

use crate::core::bookstore::BookstoreError;
use crate::core::bookstore::BookstoreResult;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

const INITIAL_SCHEMA: &str = include_str!("../../migrations/001_initial.sql");

// helper method to open the store, turn on constraint enforcement and apply
// the embedded schema. The returned connection handle is cheap to clone and
// internally synchronized, so one per process is shared across requests.
pub async fn connect(config: &Configuration, store: RepositoryStore) -> BookstoreResult<libsql::Connection> {
    let path = match store {
        RepositoryStore::Sqlite => config.database_path.as_str(),
        RepositoryStore::InMemory => ":memory:",
    };
    let db = Builder::new_local(path).build().await?;
    let conn = db.connect()?;
    // foreign keys are off by default and scoped per connection in SQLite
    conn.execute("PRAGMA foreign_keys = ON", ()).await?;
    conn.execute_batch(INITIAL_SCHEMA).await?;
    Ok(conn)
}

impl From<libsql::Error> for BookstoreError {
    fn from(err: libsql::Error) -> Self {
        let message = format!("{}", err);
        if message.contains("FOREIGN KEY constraint failed") {
            BookstoreError::validation(message.as_str(), Some("foreign_key".to_string()))
        } else if message.contains("UNIQUE constraint failed") {
            BookstoreError::duplicate_key(message.as_str())
        } else {
            // a locked or busy database clears up once the writer finishes
            let retryable = message.contains("database is locked")
                || message.contains("database table is locked");
            BookstoreError::database(message.as_str(), None, retryable)
        }
    }
}

// required to enable structured error logging by the runtime
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // ANSI color codes interleave badly with log collectors.
        .with_ansi(false)
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use crate::core::bookstore::BookstoreError;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::utils::db::{connect, INITIAL_SCHEMA};

    #[tokio::test]
    async fn test_should_connect_and_create_schema() {
        let config = Configuration::new(":memory:");
        let conn = connect(&config, RepositoryStore::InMemory).await.unwrap();
        for table in ["authors", "books"] {
            let mut rows = conn.query(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table]).await.unwrap();
            assert!(rows.next().await.unwrap().is_some());
        }
    }

    #[tokio::test]
    async fn test_should_reapply_schema_idempotently() {
        let config = Configuration::new(":memory:");
        let conn = connect(&config, RepositoryStore::InMemory).await.unwrap();
        conn.execute_batch(INITIAL_SCHEMA).await.unwrap();
    }

    #[tokio::test]
    async fn test_should_enforce_foreign_keys() {
        let config = Configuration::new(":memory:");
        let conn = connect(&config, RepositoryStore::InMemory).await.unwrap();
        let res = conn.execute(
            "INSERT INTO books (title, author_id, count, created_at, updated_at) \
             VALUES ('orphan', 999, 1, '2023-01-01T00:00:00.0', '2023-01-01T00:00:00.0')",
            ()).await;
        assert!(res.is_err());
        let err = BookstoreError::from(res.unwrap_err());
        assert!(matches!(err, BookstoreError::Validation { message: _, reason_code: _ }));
    }
}
