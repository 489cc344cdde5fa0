use crate::authors::factory as authors_factory;
use crate::books::factory as books_factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub(crate) fn create_catalog_service(config: &Configuration,
                                     conn: libsql::Connection) -> Box<dyn CatalogService> {
    let book_repository = books_factory::create_book_repository(conn.clone());
    let author_repository = authors_factory::create_author_repository(conn);
    Box::new(CatalogServiceImpl::new(config, book_repository, author_repository))
}
