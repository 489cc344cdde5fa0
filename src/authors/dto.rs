use serde::{Deserialize, Serialize};

// AuthorDto is a data transfer object for the authors API and rides along
// inside every book response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

// Write-side payload for creating or fully replacing an author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorPayload {
    pub first_name: String,
    pub last_name: String,
}

impl AuthorPayload {
    pub fn new(first_name: &str, last_name: &str) -> AuthorPayload {
        AuthorPayload {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}
