use serde::{Deserialize, Serialize};

use crate::authors::dto::AuthorDto;

// BookDto is a data transfer object for the catalog API. The author rides
// along as a nested read-only object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: AuthorDto,
    pub count: i64,
}

// Write-side payload. Books reference their author by id only, the nested
// author object never appears in request bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPayload {
    pub title: String,
    pub author_id: i64,
    pub count: i64,
}

impl BookPayload {
    pub fn new(title: &str, author_id: i64, count: i64) -> BookPayload {
        BookPayload {
            title: title.to_string(),
            author_id,
            count,
        }
    }
}
