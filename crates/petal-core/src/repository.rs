//! Repository trait definitions for data access abstraction.
//!
//! All operations are async and read-only: rows are written by an
//! external editor/provisioning process, and this core only reads
//! consistent-enough snapshots (read skew between the two content
//! blobs of a section is acceptable). Absence is signalled with
//! [`PetalError::NotFound`]; the services above decide whether that
//! degrades to an empty result.

use uuid::Uuid;

use crate::error::PetalResult;
use crate::models::{Business, Page, PreviewToken, Product, Section};

pub trait BusinessRepository: Send + Sync {
    /// Exactly one business per slug, or `NotFound`.
    fn get_by_slug(&self, slug: &str) -> impl Future<Output = PetalResult<Business>> + Send;
}

pub trait PageRepository: Send + Sync {
    /// Exactly one page per `(org_id, slug)` pair, or `NotFound`.
    fn get_by_slug(
        &self,
        org_id: Uuid,
        slug: &str,
    ) -> impl Future<Output = PetalResult<Page>> + Send;
}

pub trait SectionRepository: Send + Sync {
    /// All sections of a page, ordered ascending by `position`.
    /// Ties keep the store's original order.
    fn list_by_page(&self, page_id: Uuid) -> impl Future<Output = PetalResult<Vec<Section>>> + Send;
}

pub trait PreviewTokenRepository: Send + Sync {
    /// Fetch a token by its primary key (the bearer value).
    ///
    /// Implementations must read with store access that bypasses any
    /// row-level tenant visibility restriction — the validator above
    /// is the trust boundary, not the store's access policy. Expiry is
    /// NOT checked here: the validator distinguishes "unknown" from
    /// "expired" for its rejection reason.
    fn get(&self, token: &str) -> impl Future<Output = PetalResult<PreviewToken>> + Send;
}

pub trait ProductRepository: Send + Sync {
    /// Active products for a business, newest first.
    fn list_active(
        &self,
        business_id: Uuid,
    ) -> impl Future<Output = PetalResult<Vec<Product>>> + Send;
}
