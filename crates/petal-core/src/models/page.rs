//! Page domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication lifecycle shared by pages and sections.
///
/// `Dirty` means "published, but with unpublished edits on top" — the
/// public view keeps showing the last published state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Published,
    Dirty,
    Draft,
}

/// One landing page belonging to exactly one business.
///
/// `(org_id, slug)` is unique; `org_id` is the owning business id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    pub org_id: Uuid,
    pub name: String,
    /// Unique within the owning business (e.g., `home`).
    pub slug: String,
    pub template: Option<String>,
    pub status: PublishStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
