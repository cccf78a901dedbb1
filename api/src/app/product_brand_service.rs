//! Product brand service
//!
//! Serves brand listings and lookups from a catalog repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::catalog::{fetch_by_id, fetch_page};
use crate::domain::entities::ProductBrand;
use crate::domain::operation_result::OperationResult;
use crate::domain::pagination::Pagination;
use crate::domain::ports::{CatalogRepository, ProductBrandService};
use crate::domain::spec_params::BrandSpecParams;

/// Service for reading product brands
pub struct ProductBrandCatalog<R>
where
    R: CatalogRepository<ProductBrand>,
{
    brands: Arc<R>,
}

impl<R> ProductBrandCatalog<R>
where
    R: CatalogRepository<ProductBrand>,
{
    pub fn new(brands: Arc<R>) -> Self {
        Self { brands }
    }
}

#[async_trait]
impl<R> ProductBrandService for ProductBrandCatalog<R>
where
    R: CatalogRepository<ProductBrand>,
{
    async fn get_paginated(
        &self,
        params: &BrandSpecParams,
    ) -> OperationResult<Pagination<ProductBrand>> {
        fetch_page(self.brands.as_ref(), params).await
    }

    async fn get_by_id(&self, id: i32) -> OperationResult<ProductBrand> {
        fetch_by_id(self.brands.as_ref(), id).await
    }
}
