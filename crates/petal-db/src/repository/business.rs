//! SurrealDB implementation of [`BusinessRepository`].

use chrono::{DateTime, Utc};
use petal_core::error::PetalResult;
use petal_core::models::Business;
use petal_core::repository::BusinessRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;
use crate::repository::parse_uuid;

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct BusinessRowWithId {
    record_id: String,
    slug: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BusinessRowWithId {
    fn try_into_business(self) -> Result<Business, DbError> {
        let id = parse_uuid("business", &self.record_id)?;
        Ok(Business {
            id,
            slug: self.slug,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the Business repository.
#[derive(Clone)]
pub struct SurrealBusinessRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealBusinessRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> BusinessRepository for SurrealBusinessRepository<C> {
    async fn get_by_slug(&self, slug: &str) -> PetalResult<Business> {
        let slug_owned = slug.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM business \
                 WHERE slug = $slug",
            )
            .bind(("slug", slug_owned))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<BusinessRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "business".into(),
            id: format!("slug={slug}"),
        })?;

        Ok(row.try_into_business()?)
    }
}
