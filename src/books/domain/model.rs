use chrono::NaiveDateTime;

use crate::authors::domain::model::AuthorEntity;

// BookEntity abstracts a stocked title. count is how many copies the store
// holds right now; only the purchase path enforces that it never goes below
// zero, full-replace writes store whatever value the caller supplied.
#[derive(Debug, PartialEq)]
pub struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author_id: i64,
    pub count: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Field set for a create or full-replace write, before the store has
// assigned an id.
#[derive(Debug, PartialEq, Clone)]
pub struct NewBook {
    pub title: String,
    pub author_id: i64,
    pub count: i64,
}

impl NewBook {
    pub fn new(title: &str, author_id: i64, count: i64) -> Self {
        Self {
            title: title.to_string(),
            author_id,
            count,
        }
    }
}

// Read model pairing a book with its author row. Loaded in a single join so
// listings never fan out into per-book author lookups.
#[derive(Debug, PartialEq)]
pub struct BookWithAuthor {
    pub book: BookEntity,
    pub author: AuthorEntity,
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::NewBook;

    #[tokio::test]
    async fn test_should_build_book() {
        let book = NewBook::new("The Dispossessed", 1, 5);
        assert_eq!("The Dispossessed", book.title.as_str());
        assert_eq!(1, book.author_id);
        assert_eq!(5, book.count);
    }
}
