//! Paging defaults shared by every list view.
//!
//! List endpoints accept `page` (1-based) and `size`; the console only ever
//! offers the sizes in [`PAGE_SIZE_OPTIONS`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selectable page sizes, ascending.
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [20, 50, 100];

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("unsupported page size {0}, expected one of 20, 50, 100")]
    UnsupportedPageSize(u32),
}

/// One of [`PAGE_SIZE_OPTIONS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PageSize {
    #[default]
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Twenty, PageSize::Fifty, PageSize::Hundred];

    pub fn get(self) -> u32 {
        match self {
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Resolve a requested size, falling back to the default when absent.
    pub fn from_param(size: Option<u32>) -> Result<Self, PaginationError> {
        size.map_or(Ok(Self::default()), Self::try_from)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = PaginationError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        match size {
            20 => Ok(PageSize::Twenty),
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            other => Err(PaginationError::UnsupportedPageSize(other)),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// A page position in a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    pub size: PageSize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: PageSize::default(),
        }
    }
}

impl PageRequest {
    /// Page 0 is treated as the first page.
    pub fn new(page: u32, size: PageSize) -> Self {
        Self {
            page: page.max(1),
            size,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.size.get())
    }
}

/// Paged list response returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ListResult<T> {
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 1;
        }
        self.total.div_ceil(u64::from(self.size)).max(1)
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}
