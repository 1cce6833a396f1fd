//! Catalog location

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the catalog document lives
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// JSON or YAML catalog file
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Resolve the catalog path, preferring an explicit override.
    pub fn resolve<'a>(&'a self, cli: Option<&'a Path>) -> Result<&'a Path, ValidationError> {
        cli.or(self.path.as_deref())
            .ok_or(ValidationError::MissingRequired("catalog.path"))
    }
}
