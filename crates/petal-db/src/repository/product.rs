//! SurrealDB implementation of [`ProductRepository`].

use chrono::{DateTime, Utc};
use petal_core::error::PetalResult;
use petal_core::models::{Product, ProductStatus};
use petal_core::repository::ProductRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;
use crate::repository::parse_uuid;

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct ProductRowWithId {
    record_id: String,
    business_id: String,
    name: String,
    price: f64,
    image_url: String,
    benefits: Vec<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn parse_product_status(s: &str) -> Result<ProductStatus, DbError> {
    match s {
        "active" => Ok(ProductStatus::Active),
        "archived" => Ok(ProductStatus::Archived),
        other => Err(DbError::Decode(format!("unknown product status: {other}"))),
    }
}

impl ProductRowWithId {
    fn try_into_product(self) -> Result<Product, DbError> {
        let id = parse_uuid("product", &self.record_id)?;
        let business_id = parse_uuid("business", &self.business_id)?;
        Ok(Product {
            id,
            business_id,
            name: self.name,
            price: self.price,
            image_url: self.image_url,
            benefits: self.benefits,
            status: parse_product_status(&self.status)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the Product repository.
#[derive(Clone)]
pub struct SurrealProductRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealProductRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> ProductRepository for SurrealProductRepository<C> {
    async fn list_active(&self, business_id: Uuid) -> PetalResult<Vec<Product>> {
        let business_id_str = business_id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM retail_product \
                 WHERE business_id = $business_id AND status = 'active' \
                 ORDER BY created_at DESC",
            )
            .bind(("business_id", business_id_str))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ProductRowWithId> = result.take(0).map_err(DbError::from)?;

        let products = rows
            .into_iter()
            .map(|row| row.try_into_product())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(products)
    }
}
