//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Parameters are validated
//! here, before any service call.

pub mod health;
pub mod product_brands;
pub mod product_types;

pub use health::health;
pub use product_brands::{get_product_brand, list_product_brands};
pub use product_types::{get_product_type, list_product_types};

use crate::domain::spec_params::{validate_id, validate_spec_params, SpecParams};
use crate::error::AppError;

/// Reject pages with a non-positive index or size
pub(crate) fn ensure_valid_page<P: SpecParams>(params: &P) -> Result<(), AppError> {
    if validate_spec_params(params) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "pageIndex and pageSize must be greater than zero (got pageIndex={}, pageSize={})",
            params.page_index(),
            params.page_size()
        )))
    }
}

/// Reject ids that cannot identify a stored entity
pub(crate) fn ensure_valid_id(id: i32) -> Result<(), AppError> {
    if validate_id(id) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "id must be greater than zero (got {})",
            id
        )))
    }
}
