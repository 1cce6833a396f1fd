//! File Catalog Source Adapter - loads a catalog from a JSON or YAML file.
//!
//! The file holds a `questions` list and an `items` list:
//!
//! ```yaml
//! questions:
//!   - key: skinType
//!     attribute: skinType
//!     isMultiValued: false
//!     predicate: { kind: category_or_catch_all, catch_all: universal }
//! items:
//!   - id: 1
//!     name: Daily Gel
//!     skinType: oily
//! ```

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::domain::catalog::{Catalog, CatalogDocument};
use crate::ports::{CatalogError, CatalogSource};

/// Maximum catalog file size (4 MB). Catalogs hold tens to hundreds of items.
const MAX_CATALOG_BYTES: u64 = 4 * 1024 * 1024;

/// Serialization format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Detects the format from `path`'s extension.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(CatalogFormat::Json),
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parses raw file content into a validated catalog.
    pub fn parse(&self, content: &str) -> Result<Catalog, CatalogError> {
        let doc: CatalogDocument = match self {
            CatalogFormat::Json => serde_json::from_str(content)
                .map_err(|e| CatalogError::ParseFailed(e.to_string()))?,
            CatalogFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| CatalogError::ParseFailed(e.to_string()))?,
        };
        Ok(Catalog::try_from(doc)?)
    }
}

/// Catalog stored on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        let format = CatalogFormat::from_path(&self.path)?;
        let path_display = self.path.display().to_string();

        let metadata = fs::metadata(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::NotFound(path_display.clone()),
            _ => CatalogError::IoError(e.to_string()),
        })?;
        if metadata.len() > MAX_CATALOG_BYTES {
            return Err(CatalogError::IoError(format!(
                "{} is {} bytes, limit is {}",
                path_display,
                metadata.len(),
                MAX_CATALOG_BYTES
            )));
        }

        debug!(path = %path_display, ?format, "reading catalog");
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::IoError(e.to_string()))?;

        let catalog = format.parse(&content)?;
        info!(
            path = %path_display,
            items = catalog.items().len(),
            questions = catalog.questions().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
