//! Pagination parameters attached to DependencyTrack requests.
//!
//! DependencyTrack pages list endpoints server-side (100 items by default)
//! and reports the total in an `X-Total-Count` header. This client does not
//! follow pages; it asks for one very large page instead. Result sets larger
//! than [`DEFAULT_PAGE_SIZE`] are silently truncated by the server.

use serde::{Deserialize, Serialize};

/// Page size sent with every paginated request.
pub const DEFAULT_PAGE_SIZE: u32 = 10_000;

/// Query parameters for paginated requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// Number of items per page.
    pub page_size: u32,
    /// Page number (1-indexed).
    pub page_number: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
        }
    }
}

impl PageParams {
    /// Create pagination params for a specific page.
    #[must_use]
    pub fn for_page(page_number: u32, page_size: u32) -> Self {
        Self {
            page_size,
            page_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requests_one_large_page() {
        let params = PageParams::default();
        assert_eq!(params.page_size, 10_000);
        assert_eq!(params.page_number, 1);
    }

    #[test]
    fn test_serializes_camel_case_query() {
        let query = serde_qs::to_string(&PageParams::default()).unwrap();
        assert_eq!(query, "pageSize=10000&pageNumber=1");
    }

    #[test]
    fn test_for_page() {
        let query = serde_qs::to_string(&PageParams::for_page(3, 50)).unwrap();
        assert_eq!(query, "pageSize=50&pageNumber=3");
    }
}
