//! Product type service

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::catalog::{fetch_by_id, fetch_page};
use crate::domain::entities::ProductType;
use crate::domain::operation_result::OperationResult;
use crate::domain::pagination::Pagination;
use crate::domain::ports::{CatalogRepository, ProductTypeService};
use crate::domain::spec_params::ProductTypeSpecParams;

/// Service for reading product types
pub struct ProductTypeCatalog<R>
where
    R: CatalogRepository<ProductType>,
{
    types: Arc<R>,
}

impl<R> ProductTypeCatalog<R>
where
    R: CatalogRepository<ProductType>,
{
    pub fn new(types: Arc<R>) -> Self {
        Self { types }
    }
}

#[async_trait]
impl<R> ProductTypeService for ProductTypeCatalog<R>
where
    R: CatalogRepository<ProductType>,
{
    async fn get_paginated(
        &self,
        params: &ProductTypeSpecParams,
    ) -> OperationResult<Pagination<ProductType>> {
        fetch_page(self.types.as_ref(), params).await
    }

    async fn get_by_id(&self, id: i32) -> OperationResult<ProductType> {
        fetch_by_id(self.types.as_ref(), id).await
    }
}
