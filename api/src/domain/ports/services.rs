//! Service port traits
//!
//! Handlers only ever talk to the catalog through these traits, so tests can
//! swap in mocks.

use async_trait::async_trait;

use crate::domain::entities::{ProductBrand, ProductType};
use crate::domain::operation_result::OperationResult;
use crate::domain::pagination::Pagination;
use crate::domain::spec_params::{BrandSpecParams, ProductTypeSpecParams};

/// Read access to product brands
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductBrandService: Send + Sync {
    /// One page of brands matching `params`
    async fn get_paginated(
        &self,
        params: &BrandSpecParams,
    ) -> OperationResult<Pagination<ProductBrand>>;

    /// A single brand
    async fn get_by_id(&self, id: i32) -> OperationResult<ProductBrand>;
}

/// Read access to product types
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductTypeService: Send + Sync {
    /// One page of product types matching `params`
    async fn get_paginated(
        &self,
        params: &ProductTypeSpecParams,
    ) -> OperationResult<Pagination<ProductType>>;

    /// A single product type
    async fn get_by_id(&self, id: i32) -> OperationResult<ProductType>;
}
