//! Types for searchable listings.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    #[default]
    Asc,
    Desc,
}

impl SearchOrder {
    /// Apply the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SearchOrder::Asc => ordering,
            SearchOrder::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchOrder::Asc => "asc",
            SearchOrder::Desc => "desc",
        }
    }
}

impl FromStr for SearchOrder {
    type Err = SearchError;

    /// Accepts `asc`/`desc` in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SearchOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SearchOrder::Desc)
        } else {
            Err(SearchError::InvalidOrder(s.to_string()))
        }
    }
}

/// Paging, filtering and ordering parameters of a listing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
    /// Free-text term matched against names. Empty means no filter.
    #[serde(default)]
    pub search: String,
    /// Sort field name. Empty means the default ordering.
    #[serde(default, rename = "sort")]
    pub order_by: String,
    #[serde(default, rename = "dir")]
    pub order: SearchOrder,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: String::new(),
            order_by: String::new(),
            order: SearchOrder::Asc,
        }
    }
}

impl SearchInput {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            ..Self::default()
        }
    }

    /// Set the free-text filter.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set sort field and direction.
    pub fn with_order(mut self, order_by: impl Into<String>, order: SearchOrder) -> Self {
        self.order_by = order_by.into();
        self.order = order;
        self
    }

    /// Number of matching items that precede the requested page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.per_page as usize)
    }

    /// Caller-side check that paging values are positive and within `max_per_page`.
    pub fn validate(&self, max_per_page: u32) -> Result<(), SearchError> {
        if self.page < 1 {
            return Err(SearchError::InvalidPage(self.page));
        }
        if self.per_page < 1 || self.per_page > max_per_page {
            return Err(SearchError::InvalidPerPage {
                per_page: self.per_page,
                max: max_per_page,
            });
        }
        Ok(())
    }
}

/// One page of a searchable listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutput<T> {
    pub current_page: u32,
    pub per_page: u32,
    /// Number of items matching the filter, regardless of paging.
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> SearchOutput<T> {
    /// Project every item, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchOutput<U> {
        SearchOutput {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Rejected listing parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("page must be greater than zero, got {0}")]
    InvalidPage(u32),

    #[error("per_page must be between 1 and {max}, got {per_page}")]
    InvalidPerPage { per_page: u32, max: u32 },

    #[error("dir must be 'asc' or 'desc', got '{0}'")]
    InvalidOrder(String),
}
