//! In-Memory Catalog Source Adapter
//!
//! Hands out a catalog built in code. Useful for testing and embedding.

use async_trait::async_trait;

use crate::domain::catalog::Catalog;
use crate::ports::{CatalogError, CatalogSource};

/// Catalog held in memory
#[derive(Debug, Clone)]
pub struct InMemoryCatalogSource {
    catalog: Catalog,
}

impl InMemoryCatalogSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        Ok(self.catalog.clone())
    }
}
