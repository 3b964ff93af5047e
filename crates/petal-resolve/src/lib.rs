//! Petal Resolve — the decision engine of the read path.
//!
//! Given `(business slug, page slug, optional preview token)` this
//! crate decides which JSON blob feeds which section renderer, under
//! multi-tenancy, draft-vs-published visibility, and malformed-content
//! tolerance. Failure policy throughout: degrade to a typed empty
//! result, log the detail, never fault across the public boundary.

pub mod catalog;
pub mod pages;
pub mod preview;
pub mod sections;

pub use catalog::{ProductCard, ProductCatalog};
pub use pages::PageResolver;
pub use preview::{PreviewGate, RejectReason, TokenScope, TokenValidation};
pub use sections::{ResolvedSection, ResolvedSections, SectionResolver};
