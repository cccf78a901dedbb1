//! In-memory implementation of CatalogRepository

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::CatalogItem;
use crate::domain::ports::CatalogRepository;
use crate::domain::spec_params::{CatalogFilter, SortOrder};
use crate::error::DomainError;

/// Catalog items keyed by id
pub struct InMemoryCatalogRepository<E> {
    items: Arc<RwLock<BTreeMap<i32, E>>>,
}

impl<E> Clone for InMemoryCatalogRepository<E> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<E: CatalogItem> Default for InMemoryCatalogRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CatalogItem> InMemoryCatalogRepository<E> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Pre-populate without checks; a later item replaces an earlier one with the same id.
    #[cfg(test)]
    pub fn with_items(items: Vec<E>) -> Self {
        let map = items.into_iter().map(|item| (item.id(), item)).collect();
        Self {
            items: Arc::new(RwLock::new(map)),
        }
    }

    /// Pre-populate, rejecting non-positive and duplicate ids
    pub fn try_from_items(items: Vec<E>) -> Result<Self, DomainError> {
        let repo = Self::new();
        for item in items {
            repo.insert(item)?;
        }
        Ok(repo)
    }

    pub fn insert(&self, item: E) -> Result<(), DomainError> {
        if item.id() <= 0 {
            return Err(DomainError::Validation(format!(
                "{} id must be positive (got {})",
                E::KIND,
                item.id()
            )));
        }

        let mut items = self
            .items
            .write()
            .map_err(|_| DomainError::Internal("catalog lock poisoned".to_string()))?;
        if items.contains_key(&item.id()) {
            return Err(DomainError::Validation(format!(
                "Duplicate {} id {}",
                E::KIND.to_lowercase(),
                item.id()
            )));
        }
        items.insert(item.id(), item);
        Ok(())
    }

    pub fn len(&self) -> Result<usize, DomainError> {
        self.items
            .read()
            .map(|items| items.len())
            .map_err(|_| DomainError::Internal("catalog lock poisoned".to_string()))
    }
}

fn is_match<E: CatalogItem>(item: &E, filter: &CatalogFilter, needle: Option<&str>) -> bool {
    if let Some(active) = filter.is_active {
        if item.is_active() != active {
            return false;
        }
    }
    match needle {
        Some(needle) => item.name().to_lowercase().contains(needle),
        None => true,
    }
}

#[async_trait]
impl<E: CatalogItem> CatalogRepository<E> for InMemoryCatalogRepository<E> {
    async fn find_page(
        &self,
        filter: &CatalogFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<E>, i64), DomainError> {
        let needle = filter.search.as_ref().map(|s| s.to_lowercase());

        let mut found: Vec<E> = {
            let items = self
                .items
                .read()
                .map_err(|_| DomainError::Internal("catalog lock poisoned".to_string()))?;
            items
                .values()
                .filter(|item| is_match(*item, filter, needle.as_deref()))
                .cloned()
                .collect()
        };

        match filter.sort {
            Some(SortOrder::Name) => found.sort_by(|a, b| {
                a.name()
                    .to_lowercase()
                    .cmp(&b.name().to_lowercase())
                    .then(a.id().cmp(&b.id()))
            }),
            Some(SortOrder::NameDesc) => found.sort_by(|a, b| {
                b.name()
                    .to_lowercase()
                    .cmp(&a.name().to_lowercase())
                    .then(a.id().cmp(&b.id()))
            }),
            // BTreeMap already yields ascending ids
            None => {}
        }

        let total = found.len() as i64;
        let skip = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        let page = found.into_iter().skip(skip).take(take).collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<E>, DomainError> {
        let items = self
            .items
            .read()
            .map_err(|_| DomainError::Internal("catalog lock poisoned".to_string()))?;
        Ok(items.get(&id).cloned())
    }
}
