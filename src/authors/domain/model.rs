use chrono::NaiveDateTime;

// AuthorEntity abstracts a writer whose books the store stocks. Identifiers
// are assigned by the store on insert and never change afterwards.
#[derive(Debug, PartialEq)]
pub struct AuthorEntity {
    pub author_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Field set for a create or full-replace write, before the store has
// assigned an id.
#[derive(Debug, PartialEq, Clone)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
}

impl NewAuthor {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}
