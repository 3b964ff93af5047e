//! SurrealDB implementation of [`PreviewTokenRepository`].
//!
//! Token lookups run on the root connection so rows of every tenant
//! are visible — the validator in `petal-resolve` is the trust
//! boundary here, not a store-side access policy. Expiry is NOT
//! filtered in the query: the validator needs to tell an unknown
//! token apart from an expired one.

use chrono::{DateTime, Utc};
use petal_core::error::PetalResult;
use petal_core::models::PreviewToken;
use petal_core::repository::PreviewTokenRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;
use crate::repository::parse_uuid;

/// DB-side row struct; the record id (the bearer value) is already
/// known to the caller.
#[derive(Debug, SurrealValue)]
struct PreviewTokenRow {
    org_id: String,
    page_id: Option<String>,
    section_id: Option<String>,
    user_id: Option<String>,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl PreviewTokenRow {
    fn into_token(self, id: String) -> Result<PreviewToken, DbError> {
        let org_id = parse_uuid("org", &self.org_id)?;
        let page_id = self
            .page_id
            .as_deref()
            .map(|raw| parse_uuid("page", raw))
            .transpose()?;
        let section_id = self
            .section_id
            .as_deref()
            .map(|raw| parse_uuid("section", raw))
            .transpose()?;
        let user_id = self
            .user_id
            .as_deref()
            .map(|raw| parse_uuid("user", raw))
            .transpose()?;
        Ok(PreviewToken {
            id,
            org_id,
            page_id,
            section_id,
            user_id,
            expires_at: self.expires_at,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB implementation of the PreviewToken repository.
#[derive(Clone)]
pub struct SurrealPreviewTokenRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealPreviewTokenRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> PreviewTokenRepository for SurrealPreviewTokenRepository<C> {
    async fn get(&self, token: &str) -> PetalResult<PreviewToken> {
        let token_owned = token.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('preview_token', $id)")
            .bind(("id", token_owned.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<PreviewTokenRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "preview_token".into(),
            id: petal_core::models::preview_token::redact(token),
        })?;

        Ok(row.into_token(token_owned)?)
    }
}
