//! Product brand handlers
//!
//! Read-only endpoints for product brands.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::domain::entities::ProductBrand;
use crate::domain::pagination::Pagination;
use crate::domain::spec_params::BrandSpecParams;
use crate::error::AppError;
use crate::handlers::{ensure_valid_id, ensure_valid_page};
use crate::AppState;

/// GET /api/brands
///
/// One page of brands. `pageIndex` and `pageSize` must be positive.
pub async fn list_product_brands(
    State(state): State<AppState>,
    Query(params): Query<BrandSpecParams>,
) -> Result<Json<Pagination<ProductBrand>>, AppError> {
    ensure_valid_page(&params)?;

    let page = state
        .brand_service
        .get_paginated(&params)
        .await
        .into_result()?;

    Ok(Json(page))
}

/// GET /api/brands/:id
pub async fn get_product_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductBrand>, AppError> {
    ensure_valid_id(id)?;

    let brand = state.brand_service.get_by_id(id).await.into_result()?;

    Ok(Json(brand))
}
