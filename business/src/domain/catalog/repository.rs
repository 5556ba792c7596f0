use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::filter::KeywordFilter;
use super::model::Product;

/// Read port over the product catalog.
///
/// Both queries return rows in the catalog's default order; no ranking is applied.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn first(&self, limit: usize) -> Result<Vec<Product>, RepositoryError>;
    async fn search(
        &self,
        filter: &KeywordFilter,
        limit: usize,
    ) -> Result<Vec<Product>, RepositoryError>;
}
