use std::net::SocketAddr;

use bookstore::core::bookstore::BookstoreError;
use bookstore::core::controller::AppState;
use bookstore::core::domain::Configuration;
use bookstore::core::repository::RepositoryStore;
use bookstore::routes::build_router;
use bookstore::utils::db::{connect, setup_tracing};

#[tokio::main]
async fn main() -> Result<(), BookstoreError> {
    setup_tracing();

    let config = Configuration::from_env();
    let conn = connect(&config, RepositoryStore::Sqlite).await?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("listening on {} with database {}", addr, config.database_path);

    let app = build_router(AppState::new(config, conn));
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| BookstoreError::runtime(format!("server failed: {}", err).as_str(), None))
}
