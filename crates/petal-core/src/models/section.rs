//! Section domain model.
//!
//! A section is one ordered, independently editable content block on a
//! page. Its `component` string selects a renderer; the two content
//! blobs are independently mutable by the external editor and may be
//! empty, null, or malformed — the read path must tolerate all of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::page::PublishStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub page_id: Uuid,
    pub org_id: Uuid,
    /// Stable identifier for client-side element targeting, unique
    /// within a page (e.g., `hero`).
    pub key: String,
    pub label: String,
    /// Renderer selector. A closed set on the render side; unknown
    /// values degrade to a placeholder, never an error.
    pub component: String,
    /// Ascending display order. Ties keep the store's original order.
    pub position: i64,
    /// Publicly visible content blob.
    pub published_content: Value,
    /// Content visible only under a valid preview token.
    pub draft_content: Value,
    pub status: PublishStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
