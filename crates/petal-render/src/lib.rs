//! Petal Render — maps a section's declared component name to a
//! renderer and feeds it normalized content.
//!
//! Every renderer is a pure function from a JSON content record to a
//! fully populated view model: missing, partial, or malformed fields
//! get component-local defaults, and an unknown component name becomes
//! a visible placeholder. Content is externally authored, so nothing
//! in this crate is allowed to fail.

pub mod blocks;
pub mod component;
pub mod dispatch;
mod extract;
pub mod hero;

pub use component::ComponentKind;
pub use dispatch::{RenderedSection, dispatch};
