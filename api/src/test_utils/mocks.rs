//! Fake implementations of port traits

use async_trait::async_trait;

use crate::domain::entities::CatalogItem;
use crate::domain::ports::CatalogRepository;
use crate::domain::spec_params::CatalogFilter;
use crate::error::DomainError;

/// Repository whose every call fails with an internal error
pub struct FailingCatalogRepository;

#[async_trait]
impl<E: CatalogItem> CatalogRepository<E> for FailingCatalogRepository {
    async fn find_page(
        &self,
        _filter: &CatalogFilter,
        _offset: i64,
        _limit: i64,
    ) -> Result<(Vec<E>, i64), DomainError> {
        Err(DomainError::Internal("storage unavailable".to_string()))
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<E>, DomainError> {
        Err(DomainError::Internal("storage unavailable".to_string()))
    }
}

/// Repository that ignores `offset` and `limit` and hands back every item
pub struct OverfullCatalogRepository<E> {
    pub items: Vec<E>,
}

#[async_trait]
impl<E: CatalogItem> CatalogRepository<E> for OverfullCatalogRepository<E> {
    async fn find_page(
        &self,
        _filter: &CatalogFilter,
        _offset: i64,
        _limit: i64,
    ) -> Result<(Vec<E>, i64), DomainError> {
        Ok((self.items.clone(), self.items.len() as i64))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<E>, DomainError> {
        Ok(self.items.iter().find(|item| item.id() == id).cloned())
    }
}
