//! Public product listing — the secondary read surface.
//!
//! Not part of the resolution core, but it shares the same degrade-to-
//! empty failure policy: an unknown business slug or a store error
//! produces an empty list, never a fault.

use petal_core::models::Product;
use petal_core::repository::{BusinessRepository, ProductRepository};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

/// At most this many benefit bullets are exposed per product.
const MAX_BENEFITS: usize = 3;

/// The public shape of a product listing entry.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub benefits: Vec<String>,
}

impl From<Product> for ProductCard {
    fn from(product: Product) -> Self {
        let mut benefits = product.benefits;
        benefits.truncate(MAX_BENEFITS);
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image_url: product.image_url,
            benefits,
        }
    }
}

/// Lists a business's active products for the public storefront.
pub struct ProductCatalog<B: BusinessRepository, R: ProductRepository> {
    businesses: B,
    products: R,
}

impl<B: BusinessRepository, R: ProductRepository> ProductCatalog<B, R> {
    pub fn new(businesses: B, products: R) -> Self {
        Self { businesses, products }
    }

    /// Active products, newest first, trimmed to the public card shape.
    pub async fn list(&self, business_slug: &str) -> Vec<ProductCard> {
        let business = match self.businesses.get_by_slug(business_slug).await {
            Ok(business) => business,
            Err(e) => {
                warn!(business = %business_slug, error = %e, "business lookup failed for product listing");
                return Vec::new();
            }
        };

        match self.products.list_active(business.id).await {
            Ok(products) => products.into_iter().map(ProductCard::from).collect(),
            Err(e) => {
                warn!(business = %business_slug, error = %e, "product fetch failed");
                Vec::new()
            }
        }
    }
}
