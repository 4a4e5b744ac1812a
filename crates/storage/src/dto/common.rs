use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{Result, StorageError};

#[derive(Debug, Clone, Copy, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_items_per_page() -> u32 {
    20
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            items_per_page: default_items_per_page(),
        }
    }
}

impl PaginationParams {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.items_per_page < 1 || self.items_per_page > 100 {
            return Err("itemsPerPage must be between 1 and 100".to_string());
        }
        Ok(())
    }

    /// Slice bounds for a result set of `total_count` rows.
    pub fn window(&self, total_count: i64) -> Result<PageWindow> {
        paginate(total_count, self.page, self.items_per_page)
    }
}

/// Slice bounds and page count for one page of a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: i64,
    pub take: i64,
    pub total_pages: u32,
}

/// Computes the slice for `page` (1-based) of a result set.
///
/// The page count is `total_count / items_per_page + 1`, which reports one
/// trailing empty page when `total_count` is an exact multiple of
/// `items_per_page`. Clients depend on that count, so page 1 is always
/// valid, even for an empty result set.
pub fn paginate(total_count: i64, page: u32, items_per_page: u32) -> Result<PageWindow> {
    if items_per_page == 0 {
        return Err(StorageError::InvalidPage {
            page,
            total_pages: 0,
        });
    }

    let per_page = i64::from(items_per_page);
    let total_pages = u32::try_from(total_count.max(0) / per_page + 1).unwrap_or(u32::MAX);

    if page == 0 || page > total_pages {
        return Err(StorageError::InvalidPage { page, total_pages });
    }

    Ok(PageWindow {
        skip: per_page * (i64::from(page) - 1),
        take: per_page,
        total_pages,
    })
}

/// Envelope shared by every list endpoint.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total_elements: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(results: Vec<T>, page: u32, window: &PageWindow, total_elements: i64) -> Self {
        Self {
            results,
            page,
            total_pages: window.total_pages,
            total_elements,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            results: self.results.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
        }
    }
}
