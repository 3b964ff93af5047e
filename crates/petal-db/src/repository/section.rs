//! SurrealDB implementation of [`SectionRepository`].

use chrono::{DateTime, Utc};
use petal_core::error::PetalResult;
use petal_core::models::Section;
use petal_core::repository::SectionRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;
use crate::repository::{parse_publish_status, parse_uuid};

/// DB-side row struct that includes the record ID via `meta::id(id)`.
///
/// Both content blobs come back as raw JSON — their shape is owned by
/// the external editor and decoded leniently downstream.
#[derive(Debug, SurrealValue)]
struct SectionRowWithId {
    record_id: String,
    page_id: String,
    org_id: String,
    key: String,
    label: String,
    component: String,
    position: i64,
    published_content: serde_json::Value,
    draft_content: serde_json::Value,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SectionRowWithId {
    fn try_into_section(self) -> Result<Section, DbError> {
        let id = parse_uuid("section", &self.record_id)?;
        let page_id = parse_uuid("page", &self.page_id)?;
        let org_id = parse_uuid("org", &self.org_id)?;
        Ok(Section {
            id,
            page_id,
            org_id,
            key: self.key,
            label: self.label,
            component: self.component,
            position: self.position,
            published_content: self.published_content,
            draft_content: self.draft_content,
            status: parse_publish_status(&self.status)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the Section repository.
#[derive(Clone)]
pub struct SurrealSectionRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealSectionRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> SectionRepository for SurrealSectionRepository<C> {
    async fn list_by_page(&self, page_id: Uuid) -> PetalResult<Vec<Section>> {
        let page_id_str = page_id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM page_section \
                 WHERE page_id = $page_id \
                 ORDER BY position ASC",
            )
            .bind(("page_id", page_id_str))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<SectionRowWithId> = result.take(0).map_err(DbError::from)?;

        let sections = rows
            .into_iter()
            .map(|row| row.try_into_section())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(sections)
    }
}
