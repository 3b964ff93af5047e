//! SurrealDB repository implementations.

mod business;
mod page;
mod preview_token;
mod product;
mod section;

pub use business::SurrealBusinessRepository;
pub use page::SurrealPageRepository;
pub use preview_token::SurrealPreviewTokenRepository;
pub use product::SurrealProductRepository;
pub use section::SurrealSectionRepository;

use petal_core::models::PublishStatus;
use uuid::Uuid;

use crate::error::DbError;

pub(crate) fn parse_publish_status(s: &str) -> Result<PublishStatus, DbError> {
    match s {
        "published" => Ok(PublishStatus::Published),
        "dirty" => Ok(PublishStatus::Dirty),
        "draft" => Ok(PublishStatus::Draft),
        other => Err(DbError::Decode(format!("unknown publish status: {other}"))),
    }
}

pub(crate) fn parse_uuid(field: &str, raw: &str) -> Result<Uuid, DbError> {
    Uuid::parse_str(raw).map_err(|e| DbError::Decode(format!("invalid {field} UUID: {e}")))
}
