//! Petal Core — domain models, repository traits, and the pure
//! content-normalization layer.
//!
//! This crate has no I/O. Everything that talks to the store lives in
//! `petal-db`; everything that makes resolution decisions lives in
//! `petal-resolve`.

pub mod content;
pub mod error;
pub mod models;
pub mod repository;

pub use error::{PetalError, PetalResult};
