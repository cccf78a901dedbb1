//! Catalog seed data
//!
//! The seed file is a JSON document of the form
//! `{"brands": [{"id": 1, "name": "...", "isActive": true}], "types": [...]}`.
//! Either list may be omitted.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::adapters::memory::InMemoryCatalogRepository;
use crate::domain::entities::{ProductBrand, ProductType};
use crate::error::SeedError;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub brands: Vec<ProductBrand>,
    #[serde(default)]
    pub types: Vec<ProductType>,
}

impl CatalogSeed {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let json = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Build validated repositories for brands and types
    pub fn into_repositories(
        self,
    ) -> Result<
        (
            InMemoryCatalogRepository<ProductBrand>,
            InMemoryCatalogRepository<ProductType>,
        ),
        SeedError,
    > {
        let brands = InMemoryCatalogRepository::try_from_items(self.brands)?;
        let types = InMemoryCatalogRepository::try_from_items(self.types)?;
        Ok((brands, types))
    }
}
