//! SurrealDB implementation of [`PageRepository`].

use chrono::{DateTime, Utc};
use petal_core::error::PetalResult;
use petal_core::models::Page;
use petal_core::repository::PageRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;
use crate::repository::{parse_publish_status, parse_uuid};

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct PageRowWithId {
    record_id: String,
    org_id: String,
    name: String,
    slug: String,
    template: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PageRowWithId {
    fn try_into_page(self) -> Result<Page, DbError> {
        let id = parse_uuid("page", &self.record_id)?;
        let org_id = parse_uuid("org", &self.org_id)?;
        Ok(Page {
            id,
            org_id,
            name: self.name,
            slug: self.slug,
            template: self.template,
            status: parse_publish_status(&self.status)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the Page repository.
#[derive(Clone)]
pub struct SurrealPageRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealPageRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> PageRepository for SurrealPageRepository<C> {
    async fn get_by_slug(&self, org_id: Uuid, slug: &str) -> PetalResult<Page> {
        let org_id_str = org_id.to_string();
        let slug_owned = slug.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM page \
                 WHERE org_id = $org_id AND slug = $slug",
            )
            .bind(("org_id", org_id_str))
            .bind(("slug", slug_owned))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<PageRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "page".into(),
            id: format!("org={org_id},slug={slug}"),
        })?;

        Ok(row.try_into_page()?)
    }
}
