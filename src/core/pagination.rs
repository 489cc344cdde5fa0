use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

use crate::core::bookstore::{BookstoreError, BookstoreResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 1000;

// Window over a listing as requested by the client. Pages are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
    // page_size as the client explicitly sent it, echoed into page links
    pub client_page_size: Option<usize>,
}

impl PageRequest {
    // A page_size above the maximum is rejected, never clamped. A page_size
    // that does not parse as a positive number silently falls back to the
    // default. A page that does not parse as a positive number is treated
    // like any other nonexistent page.
    pub fn from_params(page: Option<&str>, page_size: Option<&str>,
                       default_page_size: usize, max_page_size: usize) -> BookstoreResult<PageRequest> {
        let (size, client_size) = match page_size {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(n) if n > max_page_size as i64 => {
                    return Err(BookstoreError::invalid_page_size("Invalid page size"));
                }
                Ok(n) if n > 0 => (n as usize, Some(n as usize)),
                Ok(_) => (default_page_size, None),
                Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow) => {
                    return Err(BookstoreError::invalid_page_size("Invalid page size"));
                }
                Err(_) => (default_page_size, None),
            },
            None => (default_page_size, None),
        };
        let page = match page {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(BookstoreError::not_found("Invalid page")),
            },
            None => 1,
        };
        Ok(PageRequest { page, page_size: size, client_page_size: client_size })
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    // Number of pages in a collection with the given total. An empty
    // collection still has one valid, empty page.
    pub fn last_page(&self, total: usize) -> usize {
        if total == 0 {
            1
        } else {
            (total + self.page_size - 1) / self.page_size
        }
    }

    pub fn validate(&self, total: usize) -> BookstoreResult<()> {
        if self.page > self.last_page(total) {
            return Err(BookstoreError::not_found("Invalid page"));
        }
        Ok(())
    }
}

// It defines the envelope for paginated listings. count is the total number
// of matching records, not the length of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub(crate) fn new(path: &str, page_request: &PageRequest, total: usize,
                      extra_params: &[(&str, String)], results: Vec<T>) -> Self {
        let next = if page_request.page < page_request.last_page(total) {
            Some(page_link(path, page_request.page + 1, page_request, extra_params))
        } else {
            None
        };
        let previous = if page_request.page > 1 {
            Some(page_link(path, page_request.page - 1, page_request, extra_params))
        } else {
            None
        };
        PaginatedResponse { count: total, next, previous, results }
    }
}

// Relative link to the given page, carrying the filter params and any page
// size the client asked for. A link to page one drops the page param.
fn page_link(path: &str, page: usize, page_request: &PageRequest,
             extra_params: &[(&str, String)]) -> String {
    let mut params: Vec<String> = extra_params.iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();
    if page > 1 {
        params.push(format!("page={}", page));
    }
    if let Some(size) = page_request.client_page_size {
        params.push(format!("page_size={}", size));
    }
    if params.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, params.join("&"))
    }
}
