//! Preview token validation — the gate that decides draft visibility.
//!
//! A rejection here is not an error: the request simply proceeds as a
//! public view. Validation is non-destructive; a token stays usable
//! until its natural expiry. Lookups run against store access that
//! sees every tenant's tokens — this gate is the trust boundary, not
//! the store's row visibility policy.

use chrono::Utc;
use petal_core::error::PetalError;
use petal_core::models::PreviewToken;
use petal_core::models::preview_token::redact;
use petal_core::repository::PreviewTokenRepository;
use tracing::{debug, warn};
use uuid::Uuid;

/// Caller-supplied scope to check the token against. Fields left as
/// `None` are not checked — partial scoping is allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenScope {
    pub org_id: Option<Uuid>,
    pub page_id: Option<Uuid>,
    pub section_id: Option<Uuid>,
}

impl TokenScope {
    /// Scope a validation to a single page.
    pub fn page(page_id: Uuid) -> Self {
        Self {
            page_id: Some(page_id),
            ..Self::default()
        }
    }
}

/// Why a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("token not found")]
    Unknown,

    #[error("token has expired")]
    Expired,

    #[error("token does not match organization")]
    OrgMismatch,

    #[error("token does not match page")]
    PageMismatch,

    #[error("token does not match section")]
    SectionMismatch,

    #[error("token lookup unavailable")]
    Unavailable,
}

/// Outcome of a validation. Carries the token record on success so
/// callers can inspect its own scoping fields.
#[derive(Debug, Clone)]
pub struct TokenValidation {
    pub valid: bool,
    pub token: Option<PreviewToken>,
    pub reason: Option<RejectReason>,
}

impl TokenValidation {
    fn accepted(token: PreviewToken) -> Self {
        Self {
            valid: true,
            token: Some(token),
            reason: None,
        }
    }

    fn rejected(reason: RejectReason) -> Self {
        Self {
            valid: false,
            token: None,
            reason: Some(reason),
        }
    }
}

/// Validates preview tokens against expiry and caller-supplied scope.
pub struct PreviewGate<T: PreviewTokenRepository> {
    tokens: T,
}

impl<T: PreviewTokenRepository> PreviewGate<T> {
    pub fn new(tokens: T) -> Self {
        Self { tokens }
    }

    /// Validate a bearer token.
    ///
    /// Rejects when the token is unknown, expired (`expires_at <=
    /// now`), or when any scope field the caller supplied does not
    /// exactly match the token's corresponding field. A token whose
    /// own `page_id`/`section_id` is unset does not satisfy a
    /// caller-supplied page/section scope — scoped requests require a
    /// token minted for that exact target.
    pub async fn validate(&self, token: &str, scope: &TokenScope) -> TokenValidation {
        let record = match self.tokens.get(token).await {
            Ok(record) => record,
            Err(PetalError::NotFound { .. }) => {
                debug!(token = %redact(token), "preview token not found");
                return TokenValidation::rejected(RejectReason::Unknown);
            }
            Err(e) => {
                warn!(token = %redact(token), error = %e, "preview token lookup failed");
                return TokenValidation::rejected(RejectReason::Unavailable);
            }
        };

        if record.expires_at <= Utc::now() {
            debug!(token = %redact(token), expired_at = %record.expires_at, "preview token expired");
            return TokenValidation::rejected(RejectReason::Expired);
        }

        if let Some(org_id) = scope.org_id
            && record.org_id != org_id
        {
            return TokenValidation::rejected(RejectReason::OrgMismatch);
        }

        if let Some(page_id) = scope.page_id
            && record.page_id != Some(page_id)
        {
            return TokenValidation::rejected(RejectReason::PageMismatch);
        }

        if let Some(section_id) = scope.section_id
            && record.section_id != Some(section_id)
        {
            return TokenValidation::rejected(RejectReason::SectionMismatch);
        }

        TokenValidation::accepted(record)
    }
}
