use crate::domain::catalog::matcher::MAX_MATCHES;
use crate::domain::catalog::model::Product;

/// Quiz answers as received from the front end.
///
/// Every field is free-form text; nothing is validated. Absent answers are
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionRequest {
    pub age: String,
    pub gender: String,
    pub relationship: String,
    pub hobby: String,
    pub budget: String,
    pub occasion: String,
    /// JSON-encoded style data from a previous style analysis, if any.
    pub style_analysis: Option<String>,
}

/// Catalog product projected onto the four fields exposed to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestedProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub url: String,
}

impl From<Product> for SuggestedProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            url: product.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionResult {
    pub suggestions: String,
    pub products: Vec<SuggestedProduct>,
}

impl SuggestionResult {
    /// Combines suggestion text with at most [`MAX_MATCHES`] products.
    pub fn assemble(suggestions: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            suggestions: suggestions.into(),
            products: products
                .into_iter()
                .take(MAX_MATCHES)
                .map(SuggestedProduct::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64) -> Product {
        Product::from_repository(
            id,
            format!("Gift {}", id),
            Some("books".to_string()),
            format!("Description {}", id),
            1500.0 + id as f64,
            format!("https://example.com/{}", id),
        )
    }

    #[test]
    fn should_project_product_to_public_fields() {
        let projected = SuggestedProduct::from(product(1));

        assert_eq!(
            projected,
            SuggestedProduct {
                name: "Gift 1".to_string(),
                description: "Description 1".to_string(),
                price: 1501.0,
                url: "https://example.com/1".to_string(),
            }
        );
    }

    #[test]
    fn should_cap_products_when_assembling() {
        let products = (1..=8).map(product).collect();

        let result = SuggestionResult::assemble("text", products);

        assert_eq!(result.suggestions, "text");
        assert_eq!(result.products.len(), MAX_MATCHES);
        assert_eq!(result.products[0].name, "Gift 1");
        assert_eq!(result.products[4].name, "Gift 5");
    }

    #[test]
    fn should_keep_empty_product_list() {
        let result = SuggestionResult::assemble("text", vec![]);
        assert!(result.products.is_empty());
    }
}
