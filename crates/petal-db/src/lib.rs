//! Petal Database — SurrealDB connection management and repository
//! implementations for the landing-page read path.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - Error types ([`DbError`])
//! - Read-only repository implementations for the `petal-core` traits
//!
//! All writes to these tables come from the external editor and
//! provisioning systems; nothing in this crate mutates content rows.

mod connection;
mod error;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::{run_migrations, schema_v1};
