//! Domain models for Petal.
//!
//! Every row type the read path consumes. All of these are written by
//! an external editor/provisioning process — this core only reads them.

pub mod business;
pub mod page;
pub mod preview_token;
pub mod product;
pub mod section;

pub use business::Business;
pub use page::{Page, PublishStatus};
pub use preview_token::PreviewToken;
pub use product::{Product, ProductStatus};
pub use section::Section;
