use crate::books::repository::BookRepository;
use crate::books::repository::sqlite_book_repository::SqliteBookRepository;

pub(crate) fn create_book_repository(conn: libsql::Connection) -> Box<dyn BookRepository> {
    Box::new(SqliteBookRepository::new(conn))
}
