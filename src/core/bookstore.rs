use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum BookstoreError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The purchase path rejects a decrement that would drive the stock count
    // below zero. The record exists; there is just nothing left to sell.
    OutOfStock {
        message: String,
    },
    // Requested page size exceeded the configured maximum. Rejected, never
    // clamped, so the caller learns about the bad request.
    InvalidPageSize {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl BookstoreError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> BookstoreError {
        BookstoreError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> BookstoreError {
        BookstoreError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> BookstoreError {
        BookstoreError::NotFound { message: message.to_string() }
    }

    pub fn out_of_stock(message: &str) -> BookstoreError {
        BookstoreError::OutOfStock { message: message.to_string() }
    }

    pub fn invalid_page_size(message: &str) -> BookstoreError {
        BookstoreError::InvalidPageSize { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> BookstoreError {
        BookstoreError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> BookstoreError {
        BookstoreError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> BookstoreError {
        BookstoreError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            BookstoreError::Database { retryable, .. } => { *retryable }
            BookstoreError::DuplicateKey { .. } => { false }
            BookstoreError::NotFound { .. } => { false }
            BookstoreError::OutOfStock { .. } => { false }
            BookstoreError::InvalidPageSize { .. } => { false }
            BookstoreError::Validation { .. } => { false }
            BookstoreError::Serialization { .. } => { false }
            BookstoreError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for BookstoreError {
    fn from(err: std::io::Error) -> Self {
        BookstoreError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for BookstoreError {
    fn from(err: serde_json::Error) -> Self {
        BookstoreError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for BookstoreError {
    fn from(err: String) -> Self {
        BookstoreError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl Display for BookstoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookstoreError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            BookstoreError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::NotFound { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::OutOfStock { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::InvalidPageSize { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            BookstoreError::Serialization { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for Repository .
pub type BookstoreResult<T> = Result<T, BookstoreError>;
