//! Catalog Source Port - Interface for loading the product catalog.
//!
//! Loading and validating the catalog happens before a session starts;
//! the wizard core only ever sees a validated [`Catalog`].

use async_trait::async_trait;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::ValidationError;

/// Errors that can occur while loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog not found: {0}")]
    NotFound(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

/// Port for obtaining a validated catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the catalog
    ///
    /// # Errors
    /// Returns `CatalogError` if the source is missing, unreadable or
    /// describes an invalid catalog
    async fn load(&self) -> Result<Catalog, CatalogError>;
}
