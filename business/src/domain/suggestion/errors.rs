#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.catalog_unavailable")]
    CatalogUnavailable(#[from] crate::domain::errors::RepositoryError),
}
