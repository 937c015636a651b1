//! Pagination contract shared by every list endpoint.
//!
//! Inbound query parameters normalize to a [`PageQuery`] (page and limit
//! default to 1 and 10); list results come back as a [`Paginated`] envelope
//! whose `total` reflects the full filtered count, independent of slicing.

use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Canonical `{page, limit, search}` shape parsed from request query params.
#[derive(Debug, Clone)]
pub struct PageQuery {
    page: u32,
    limit: u32,
    search: Option<String>,
}

impl PageQuery {
    pub fn new(page: Option<u32>, limit: Option<u32>, search: Option<String>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            limit: limit.unwrap_or(DEFAULT_LIMIT).max(1),
            // Empty search strings are treated as absent.
            search: search.filter(|s| !s.is_empty()),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

/// Pagination metadata returned with every list response.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(total: i64, query: &PageQuery) -> Self {
        let limit = query.limit() as i64;
        Self {
            total,
            page: query.page(),
            limit: query.limit(),
            total_pages: (total + limit - 1) / limit,
        }
    }
}

/// Uniform list response envelope: `{ data: [...], pagination: {...} }`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: i64, query: &PageQuery) -> Self {
        Self {
            data,
            pagination: Pagination::new(total, query),
        }
    }
}
