use std::sync::Arc;

use crate::domain::errors::RepositoryError;

use super::filter::{CaseSensitivity, KeywordFilter};
use super::model::Product;
use super::repository::ProductCatalog;

/// Upper bound on products returned for a single request.
pub const MAX_MATCHES: usize = 5;

/// Converts extracted keywords into a catalog query.
pub struct ProductMatcher {
    catalog: Arc<dyn ProductCatalog>,
    case_sensitivity: CaseSensitivity,
}

impl ProductMatcher {
    pub fn new(catalog: Arc<dyn ProductCatalog>, case_sensitivity: CaseSensitivity) -> Self {
        Self {
            catalog,
            case_sensitivity,
        }
    }

    /// Returns at most [`MAX_MATCHES`] products whose name or category contains
    /// any keyword. An empty keyword list skips filtering entirely.
    pub async fn find(&self, keywords: &[String]) -> Result<Vec<Product>, RepositoryError> {
        if keywords.is_empty() {
            return self.first().await;
        }

        let filter = KeywordFilter::new(keywords.to_vec(), self.case_sensitivity);
        self.catalog.search(&filter, MAX_MATCHES).await
    }

    /// The first [`MAX_MATCHES`] catalog rows, unfiltered.
    pub async fn first(&self) -> Result<Vec<Product>, RepositoryError> {
        self.catalog.first(MAX_MATCHES).await
    }
}
