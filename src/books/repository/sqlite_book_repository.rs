use async_trait::async_trait;
use chrono::Utc;

use crate::authors::domain::model::AuthorEntity;
use crate::books::domain::model::{BookEntity, BookWithAuthor, NewBook};
use crate::books::repository::BookRepository;
use crate::core::bookstore::{BookstoreError, BookstoreResult};
use crate::utils::date::{format_date, parse_date};

// Every read joins the author row so callers get the full read model in one
// round trip.
const SELECT_COLS: &str = "b.book_id, b.title, b.author_id, b.count, b.created_at, b.updated_at, \
                           a.author_id, a.first_name, a.last_name, a.created_at, a.updated_at";
const FROM_JOIN: &str = "FROM books b JOIN authors a ON a.author_id = b.author_id";

pub struct SqliteBookRepository {
    conn: libsql::Connection,
}

impl SqliteBookRepository {
    pub(crate) fn new(conn: libsql::Connection) -> Self {
        Self { conn }
    }
}

fn row_to_book(row: &libsql::Row) -> BookstoreResult<BookWithAuthor> {
    Ok(BookWithAuthor {
        book: BookEntity {
            book_id: row.get(0)?,
            title: row.get(1)?,
            author_id: row.get(2)?,
            count: row.get(3)?,
            created_at: parse_date(row.get::<String>(4)?.as_str())?,
            updated_at: parse_date(row.get::<String>(5)?.as_str())?,
        },
        author: AuthorEntity {
            author_id: row.get(6)?,
            first_name: row.get(7)?,
            last_name: row.get(8)?,
            created_at: parse_date(row.get::<String>(9)?.as_str())?,
            updated_at: parse_date(row.get::<String>(10)?.as_str())?,
        },
    })
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn create(&self, book: &NewBook) -> BookstoreResult<BookWithAuthor> {
        let now = format_date(Utc::now().naive_utc());
        let mut rows = self.conn.query(
            "INSERT INTO books (title, author_id, count, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5) RETURNING book_id",
            libsql::params![book.title.as_str(), book.author_id, book.count,
                now.as_str(), now.as_str()]).await?;
        let row = rows.next().await?.ok_or_else(|| BookstoreError::database(
            "insert into books returned no row", None, false))?;
        self.get(row.get(0)?).await
    }

    async fn update(&self, book_id: i64, book: &NewBook) -> BookstoreResult<BookWithAuthor> {
        let now = format_date(Utc::now().naive_utc());
        let affected = self.conn.execute(
            "UPDATE books SET title = ?2, author_id = ?3, count = ?4, updated_at = ?5 \
             WHERE book_id = ?1",
            libsql::params![book_id, book.title.as_str(), book.author_id, book.count,
                now.as_str()]).await?;
        if affected == 0 {
            return Err(BookstoreError::not_found(
                format!("book {} not found", book_id).as_str()));
        }
        self.get(book_id).await
    }

    async fn get(&self, book_id: i64) -> BookstoreResult<BookWithAuthor> {
        let mut rows = self.conn.query(
            format!("SELECT {} {} WHERE b.book_id = ?1", SELECT_COLS, FROM_JOIN).as_str(),
            [book_id]).await?;
        match rows.next().await? {
            Some(row) => row_to_book(&row),
            None => Err(BookstoreError::not_found(
                format!("book {} not found", book_id).as_str())),
        }
    }

    async fn query(&self, author_id: Option<i64>,
                   limit: usize, offset: usize) -> BookstoreResult<Vec<BookWithAuthor>> {
        let window = format!("ORDER BY b.book_id LIMIT {} OFFSET {}", limit, offset);
        let mut rows = match author_id {
            Some(author_id) => self.conn.query(
                format!("SELECT {} {} WHERE b.author_id = ?1 {}",
                        SELECT_COLS, FROM_JOIN, window).as_str(),
                [author_id]).await?,
            None => self.conn.query(
                format!("SELECT {} {} {}", SELECT_COLS, FROM_JOIN, window).as_str(),
                ()).await?,
        };
        let mut books = Vec::new();
        while let Some(row) = rows.next().await? {
            books.push(row_to_book(&row)?);
        }
        Ok(books)
    }

    async fn count_all(&self, author_id: Option<i64>) -> BookstoreResult<usize> {
        let mut rows = match author_id {
            Some(author_id) => self.conn.query(
                "SELECT COUNT(*) FROM books WHERE author_id = ?1", [author_id]).await?,
            None => self.conn.query("SELECT COUNT(*) FROM books", ()).await?,
        };
        let row = rows.next().await?.ok_or_else(|| BookstoreError::database(
            "count query returned no row", None, false))?;
        Ok(row.get::<i64>(0)? as usize)
    }

    async fn decrement_count(&self, book_id: i64) -> BookstoreResult<()> {
        // Single conditional write. The store holds its write lock for the
        // whole read-modify-write, so concurrent purchases can never drive
        // the count below zero or lose a decrement.
        let now = format_date(Utc::now().naive_utc());
        let affected = self.conn.execute(
            "UPDATE books SET count = count - 1, updated_at = ?2 \
             WHERE book_id = ?1 AND count > 0",
            libsql::params![book_id, now.as_str()]).await?;
        if affected == 1 {
            return Ok(());
        }
        // nothing changed, find out whether the book is missing or sold out
        let mut rows = self.conn.query(
            "SELECT count FROM books WHERE book_id = ?1", [book_id]).await?;
        match rows.next().await? {
            Some(_) => Err(BookstoreError::out_of_stock("Book is out of stock")),
            None => Err(BookstoreError::not_found(
                format!("book {} not found", book_id).as_str())),
        }
    }
}
