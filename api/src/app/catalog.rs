//! Shared catalog query logic
//!
//! Brands and product types are served identically; the per-resource
//! services delegate here.

use crate::domain::entities::CatalogItem;
use crate::domain::operation_result::OperationResult;
use crate::domain::pagination::{Pagination, MAX_PAGE_SIZE};
use crate::domain::ports::CatalogRepository;
use crate::domain::spec_params::{validate_id, validate_spec_params, SpecParams};
use crate::error::DomainError;

/// Load one page of `E`.
///
/// Page sizes above `MAX_PAGE_SIZE` are clamped; the returned page reports the
/// size actually used.
pub async fn fetch_page<E, R, P>(repo: &R, params: &P) -> OperationResult<Pagination<E>>
where
    E: CatalogItem,
    R: CatalogRepository<E> + ?Sized,
    P: SpecParams + ?Sized,
{
    if !validate_spec_params(params) {
        return OperationResult::invalid_data(format!(
            "pageIndex and pageSize must be positive (got {}, {})",
            params.page_index(),
            params.page_size()
        ));
    }

    let page_index = params.page_index();
    let page_size = params.page_size().min(MAX_PAGE_SIZE);
    let offset = (i64::from(page_index) - 1) * i64::from(page_size);

    let (items, count) = match repo
        .find_page(&params.filter(), offset, i64::from(page_size))
        .await
    {
        Ok(found) => found,
        Err(e) => return failure_from(e, E::KIND),
    };

    tracing::debug!(
        kind = E::KIND,
        page_index,
        page_size,
        count,
        returned = items.len(),
        "Loaded catalog page"
    );

    // The parameters were valid here, so a malformed page is a storage fault.
    match Pagination::try_new(page_index, page_size, count, items) {
        Ok(page) => OperationResult::success(page),
        Err(e) => {
            tracing::error!(kind = E::KIND, "Repository returned a malformed page: {}", e);
            OperationResult::general(format!(
                "Failed to load {} data",
                E::KIND.to_lowercase()
            ))
        }
    }
}

/// Load a single `E` by id
pub async fn fetch_by_id<E, R>(repo: &R, id: i32) -> OperationResult<E>
where
    E: CatalogItem,
    R: CatalogRepository<E> + ?Sized,
{
    if !validate_id(id) {
        return OperationResult::invalid_data(format!("Id must be positive (got {})", id));
    }

    match repo.find_by_id(id).await {
        Ok(Some(item)) => OperationResult::success(item),
        Ok(None) => OperationResult::not_found(format!("{} {} not found", E::KIND, id)),
        Err(e) => failure_from(e, E::KIND),
    }
}

fn failure_from<T>(err: DomainError, kind: &str) -> OperationResult<T> {
    match err {
        DomainError::NotFound(msg) => OperationResult::not_found(msg),
        DomainError::Validation(msg) => OperationResult::invalid_data(msg),
        DomainError::Internal(msg) => {
            tracing::error!(kind, "Catalog storage error: {}", msg);
            OperationResult::general(format!("Failed to load {} data", kind.to_lowercase()))
        }
    }
}
