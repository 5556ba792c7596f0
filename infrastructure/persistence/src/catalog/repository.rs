use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::catalog::filter::KeywordFilter;
use business::domain::catalog::model::Product;
use business::domain::catalog::repository::ProductCatalog;
use business::domain::errors::RepositoryError;

use super::entity::ProductEntity;
use super::query::{first_products, search_products};

pub struct ProductCatalogPostgres {
    pool: PgPool,
}

impl ProductCatalogPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogPostgres {
    async fn first(&self, limit: usize) -> Result<Vec<Product>, RepositoryError> {
        let mut query = first_products(limit);
        let entities = query
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Catalog query failed");
                RepositoryError::database_error()
            })?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn search(
        &self,
        filter: &KeywordFilter,
        limit: usize,
    ) -> Result<Vec<Product>, RepositoryError> {
        tracing::debug!(
            keywords = filter.keywords().len(),
            case_sensitivity = %filter.case_sensitivity(),
            "Searching catalog"
        );

        let mut query = search_products(filter, limit);
        let entities = query
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Catalog search failed");
                RepositoryError::database_error()
            })?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }
}
