use crate::authors::domain::AuthorService;
use crate::authors::domain::service::AuthorServiceImpl;
use crate::authors::repository::AuthorRepository;
use crate::authors::repository::sqlite_author_repository::SqliteAuthorRepository;
use crate::core::domain::Configuration;

pub(crate) fn create_author_repository(conn: libsql::Connection) -> Box<dyn AuthorRepository> {
    Box::new(SqliteAuthorRepository::new(conn))
}

pub(crate) fn create_author_service(config: &Configuration,
                                    conn: libsql::Connection) -> Box<dyn AuthorService> {
    Box::new(AuthorServiceImpl::new(config, create_author_repository(conn)))
}
