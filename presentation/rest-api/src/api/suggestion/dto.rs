use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::suggestion::model::{SuggestedProduct, SuggestionResult};

/// Catalog product recommended alongside the suggestion text
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Store page for the product
    pub url: String,
}

impl From<SuggestedProduct> for ProductResponse {
    fn from(p: SuggestedProduct) -> Self {
        Self {
            name: p.name,
            description: p.description,
            price: p.price,
            url: p.url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SuggestionResponse {
    /// Generated (or fallback) suggestion text
    pub suggestions: String,
    /// Up to five matching catalog products
    pub products: Vec<ProductResponse>,
}

impl From<SuggestionResult> for SuggestionResponse {
    fn from(r: SuggestionResult) -> Self {
        Self {
            suggestions: r.suggestions,
            products: r.products.into_iter().map(ProductResponse::from).collect(),
        }
    }
}
