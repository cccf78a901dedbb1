//! Product brand domain entity

use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// A brand products in the catalog are sold under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBrand {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
}

impl ProductBrand {
    pub fn new(id: i32, name: impl Into<String>, is_active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_active,
        }
    }
}

impl CatalogItem for ProductBrand {
    const KIND: &'static str = "Product brand";

    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
