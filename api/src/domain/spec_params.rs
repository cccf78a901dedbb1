//! Query parameters for paginated catalog listings
//!
//! Parameters are accepted as-is; `validate_spec_params` decides whether a
//! request describes a real page.

use serde::Deserialize;

pub const DEFAULT_PAGE_INDEX: i32 = 1;
pub const DEFAULT_PAGE_SIZE: i32 = 10;

fn default_page_index() -> i32 {
    DEFAULT_PAGE_INDEX
}

fn default_page_size() -> i32 {
    DEFAULT_PAGE_SIZE
}

/// Ordering applied to a listing. Absent means ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Name,
    NameDesc,
}

/// Filter handed to repositories, independent of the resource being listed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub is_active: Option<bool>,
    pub search: Option<String>,
    pub sort: Option<SortOrder>,
}

/// Common view over the per-resource parameter holders
pub trait SpecParams {
    fn page_index(&self) -> i32;

    fn page_size(&self) -> i32;

    fn filter(&self) -> CatalogFilter;
}

/// Parameters for `GET /api/brands`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSpecParams {
    #[serde(default = "default_page_index")]
    pub page_index: i32,
    #[serde(default = "default_page_size")]
    pub page_size: i32,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<SortOrder>,
}

/// Parameters for `GET /api/product-types`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeSpecParams {
    #[serde(default = "default_page_index")]
    pub page_index: i32,
    #[serde(default = "default_page_size")]
    pub page_size: i32,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<SortOrder>,
}

impl BrandSpecParams {
    pub fn new(page_index: i32, page_size: i32) -> Self {
        Self {
            page_index,
            page_size,
            is_active: None,
            search: None,
            sort: None,
        }
    }
}

impl Default for BrandSpecParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_INDEX, DEFAULT_PAGE_SIZE)
    }
}

impl ProductTypeSpecParams {
    pub fn new(page_index: i32, page_size: i32) -> Self {
        Self {
            page_index,
            page_size,
            is_active: None,
            search: None,
            sort: None,
        }
    }
}

impl Default for ProductTypeSpecParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_INDEX, DEFAULT_PAGE_SIZE)
    }
}

fn normalize_search(search: &Option<String>) -> Option<String> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl SpecParams for BrandSpecParams {
    fn page_index(&self) -> i32 {
        self.page_index
    }

    fn page_size(&self) -> i32 {
        self.page_size
    }

    fn filter(&self) -> CatalogFilter {
        CatalogFilter {
            is_active: self.is_active,
            search: normalize_search(&self.search),
            sort: self.sort,
        }
    }
}

impl SpecParams for ProductTypeSpecParams {
    fn page_index(&self) -> i32 {
        self.page_index
    }

    fn page_size(&self) -> i32 {
        self.page_size
    }

    fn filter(&self) -> CatalogFilter {
        CatalogFilter {
            is_active: self.is_active,
            search: normalize_search(&self.search),
            sort: self.sort,
        }
    }
}

/// True when the parameters describe a real page (index and size both positive)
pub fn validate_spec_params<P: SpecParams + ?Sized>(params: &P) -> bool {
    params.page_index() > 0 && params.page_size() > 0
}

/// True when `id` can identify a stored entity
pub fn validate_id(id: i32) -> bool {
    id > 0
}
