//! Page resolution — business slug + page slug to a page identity.

use petal_core::error::PetalError;
use petal_core::models::Page;
use petal_core::repository::{BusinessRepository, PageRepository};
use tracing::{debug, warn};

/// Resolves `(business slug, page slug)` to a page.
///
/// Stateless and uncached: tenant boundaries must never be cached
/// incorrectly across requests, so every call re-resolves from the
/// store. Absence and store failure both come back as `None` — this
/// feeds a public page that degrades to a "not configured" view
/// rather than erroring.
pub struct PageResolver<B: BusinessRepository, P: PageRepository> {
    businesses: B,
    pages: P,
}

impl<B: BusinessRepository, P: PageRepository> PageResolver<B, P> {
    pub fn new(businesses: B, pages: P) -> Self {
        Self { businesses, pages }
    }

    /// Two-step lookup: business by slug, then page by `(org_id, slug)`.
    ///
    /// The business slug is an explicit argument on purpose — the
    /// default-tenant selection happens at the server boundary, never
    /// in here.
    pub async fn resolve(&self, business_slug: &str, page_slug: &str) -> Option<Page> {
        let business = match self.businesses.get_by_slug(business_slug).await {
            Ok(business) => business,
            Err(PetalError::NotFound { .. }) => {
                debug!(business = %business_slug, "unknown business slug");
                return None;
            }
            Err(e) => {
                warn!(business = %business_slug, error = %e, "business lookup failed");
                return None;
            }
        };

        match self.pages.get_by_slug(business.id, page_slug).await {
            Ok(page) => Some(page),
            Err(PetalError::NotFound { .. }) => {
                debug!(business = %business_slug, page = %page_slug, "unknown page slug");
                None
            }
            Err(e) => {
                warn!(business = %business_slug, page = %page_slug, error = %e, "page lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use petal_core::error::PetalResult;
    use petal_core::models::Business;
    use uuid::Uuid;

    struct FailingBusinesses;

    impl BusinessRepository for FailingBusinesses {
        async fn get_by_slug(&self, _slug: &str) -> PetalResult<Business> {
            Err(PetalError::Database("store offline".into()))
        }
    }

    struct OneBusiness(Uuid);

    impl BusinessRepository for OneBusiness {
        async fn get_by_slug(&self, slug: &str) -> PetalResult<Business> {
            Ok(Business {
                id: self.0,
                slug: slug.into(),
                name: "Glow Beauty".into(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    struct FailingPages;

    impl PageRepository for FailingPages {
        async fn get_by_slug(&self, _org_id: Uuid, _slug: &str) -> PetalResult<Page> {
            Err(PetalError::Database("store offline".into()))
        }
    }

    #[tokio::test]
    async fn business_lookup_failure_degrades_to_none() {
        let resolver = PageResolver::new(FailingBusinesses, FailingPages);
        assert!(resolver.resolve("glow", "home").await.is_none());
    }

    #[tokio::test]
    async fn page_lookup_failure_degrades_to_none() {
        let resolver = PageResolver::new(OneBusiness(Uuid::new_v4()), FailingPages);
        assert!(resolver.resolve("glow", "home").await.is_none());
    }
}
