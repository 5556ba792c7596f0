/// A row of the gift catalog. Read-only from the suggestion pipeline's side.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub description: String,
    pub price: f64,
    pub url: String,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        category: Option<String>,
        description: String,
        price: f64,
        url: String,
    ) -> Self {
        Self {
            id,
            name,
            category,
            description,
            price,
            url,
        }
    }
}
