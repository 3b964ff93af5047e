//! Preview token domain model.
//!
//! The token value itself is the primary key and acts as a bearer
//! secret — it must never appear in full in diagnostic output (see
//! [`redact`]). Tokens are minted by the external editor's
//! preview-link generator, consumed read-only here, and expire
//! naturally; there is no revocation path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewToken {
    /// The bearer secret (primary key in the store).
    pub id: String,
    /// Owning business id.
    pub org_id: Uuid,
    /// If set, the token is valid only for this page.
    pub page_id: Option<Uuid>,
    /// If set, the token is valid only for this section.
    pub section_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Truncate a token for logging. Keeps enough of a prefix to correlate
/// log lines without disclosing the credential.
pub fn redact(token: &str) -> String {
    const KEEP: usize = 8;
    if token.len() <= KEEP {
        return "***".into();
    }
    let prefix: String = token.chars().take(KEEP).collect();
    format!("{prefix}***")
}
