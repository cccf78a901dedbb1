//! Paginated collection envelope
//!
//! One page of a queried collection together with the total number of
//! items matching the query.

use serde::Serialize;

use crate::error::DomainError;

/// Upper bound applied to requested page sizes
pub const MAX_PAGE_SIZE: i32 = 50;

/// One page of results.
///
/// `count` is the total number of matching items across all pages, not the
/// length of `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    page_index: i32,
    page_size: i32,
    count: i64,
    items: Vec<T>,
}

impl<T> Pagination<T> {
    /// Build a page without checking its shape.
    pub fn new(page_index: i32, page_size: i32, count: i64, items: Vec<T>) -> Self {
        Self {
            page_index,
            page_size,
            count,
            items,
        }
    }

    /// Build a page, rejecting non-positive index/size and overfull pages.
    pub fn try_new(
        page_index: i32,
        page_size: i32,
        count: i64,
        items: Vec<T>,
    ) -> Result<Self, DomainError> {
        if page_index < 1 || page_size < 1 {
            return Err(DomainError::Validation(format!(
                "Page index and size must be positive (got {}, {})",
                page_index, page_size
            )));
        }
        if items.len() > page_size as usize {
            return Err(DomainError::Validation(format!(
                "Page holds {} items but page size is {}",
                items.len(),
                page_size
            )));
        }
        if count < 0 {
            return Err(DomainError::Validation(format!(
                "Total count cannot be negative (got {})",
                count
            )));
        }

        Ok(Self::new(page_index, page_size, count, items))
    }

    pub fn page_index(&self) -> i32 {
        self.page_index
    }

    pub fn page_size(&self) -> i32 {
        self.page_size
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of pages needed to hold `count` items
    pub fn total_pages(&self) -> i64 {
        if self.page_size <= 0 || self.count <= 0 {
            return 0;
        }
        let size = i64::from(self.page_size);
        (self.count + size - 1) / size
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        i64::from(self.page_index) < self.total_pages()
    }

    /// Project every item, keeping the page metadata
    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            page_index: self.page_index,
            page_size: self.page_size,
            count: self.count,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
