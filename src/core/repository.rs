use serde::{Deserialize, Serialize};

// It selects the backing store for repositories. InMemory keeps the whole
// database private to the connection that opened it, which is what tests use.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Sqlite,
    InMemory,
}
