//! Business (tenant) domain model.
//!
//! A business is an isolated customer account owning its own pages and
//! products, keyed by a globally unique slug. Provisioning happens in
//! an external system; this core only resolves slugs to identities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    /// URL-safe unique identifier (e.g., `luxivie`).
    pub slug: String,
    /// Human-readable name.
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
