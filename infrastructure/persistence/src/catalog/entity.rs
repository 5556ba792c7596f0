use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::catalog::model::Product;
use business::domain::errors::RepositoryError;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub description: String,
    pub price: BigDecimal,
    pub url: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = self.price.to_f64().ok_or_else(RepositoryError::invalid_row)?;

        Ok(Product::from_repository(
            self.id,
            self.name,
            self.category,
            self.description,
            price,
            self.url,
        ))
    }
}
