//! Schema definitions and migration runner for SurrealDB.
//!
//! All table definitions use SCHEMAFULL mode for data integrity.
//! UUIDs are stored as strings. Statuses are stored as strings with
//! ASSERT constraints. Content blobs are FLEXIBLE objects — their
//! shape is owned by the external editor and deliberately not
//! constrained here; the read path tolerates whatever arrives.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
    #[allow(dead_code)]
    name: String,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1 — initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Businesses (tenants, global scope)
-- =======================================================================
DEFINE TABLE business SCHEMAFULL;
DEFINE FIELD slug ON TABLE business TYPE string;
DEFINE FIELD name ON TABLE business TYPE string;
DEFINE FIELD created_at ON TABLE business TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE business TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_business_slug ON TABLE business \
    COLUMNS slug UNIQUE;

-- =======================================================================
-- Pages (business scope)
-- =======================================================================
DEFINE TABLE page SCHEMAFULL;
DEFINE FIELD org_id ON TABLE page TYPE string;
DEFINE FIELD name ON TABLE page TYPE string;
DEFINE FIELD slug ON TABLE page TYPE string;
DEFINE FIELD template ON TABLE page TYPE option<string>;
DEFINE FIELD status ON TABLE page TYPE string \
    ASSERT $value IN ['published', 'dirty', 'draft'];
DEFINE FIELD created_at ON TABLE page TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE page TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_page_org_slug ON TABLE page \
    COLUMNS org_id, slug UNIQUE;

-- =======================================================================
-- Page sections (page scope, ordered)
-- =======================================================================
DEFINE TABLE page_section SCHEMAFULL;
DEFINE FIELD page_id ON TABLE page_section TYPE string;
DEFINE FIELD org_id ON TABLE page_section TYPE string;
DEFINE FIELD key ON TABLE page_section TYPE string;
DEFINE FIELD label ON TABLE page_section TYPE string;
DEFINE FIELD component ON TABLE page_section TYPE string;
DEFINE FIELD position ON TABLE page_section TYPE int;
DEFINE FIELD published_content ON TABLE page_section \
    TYPE object FLEXIBLE DEFAULT {};
DEFINE FIELD draft_content ON TABLE page_section \
    TYPE object FLEXIBLE DEFAULT {};
DEFINE FIELD status ON TABLE page_section TYPE string \
    ASSERT $value IN ['published', 'dirty', 'draft'];
DEFINE FIELD created_at ON TABLE page_section TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE page_section TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_section_page_key ON TABLE page_section \
    COLUMNS page_id, key UNIQUE;
DEFINE INDEX idx_section_page ON TABLE page_section \
    COLUMNS page_id;

-- =======================================================================
-- Preview tokens (global scope; the record id IS the bearer secret)
-- =======================================================================
DEFINE TABLE preview_token SCHEMAFULL;
DEFINE FIELD org_id ON TABLE preview_token TYPE string;
DEFINE FIELD page_id ON TABLE preview_token TYPE option<string>;
DEFINE FIELD section_id ON TABLE preview_token TYPE option<string>;
DEFINE FIELD user_id ON TABLE preview_token TYPE option<string>;
DEFINE FIELD expires_at ON TABLE preview_token TYPE datetime;
DEFINE FIELD created_at ON TABLE preview_token TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_preview_token_org ON TABLE preview_token \
    COLUMNS org_id;

-- =======================================================================
-- Retail products (business scope)
-- =======================================================================
DEFINE TABLE retail_product SCHEMAFULL;
DEFINE FIELD business_id ON TABLE retail_product TYPE string;
DEFINE FIELD name ON TABLE retail_product TYPE string;
DEFINE FIELD price ON TABLE retail_product TYPE number DEFAULT 0;
DEFINE FIELD image_url ON TABLE retail_product TYPE string DEFAULT '';
DEFINE FIELD benefits ON TABLE retail_product TYPE array DEFAULT [];
DEFINE FIELD benefits.* ON TABLE retail_product TYPE string;
DEFINE FIELD status ON TABLE retail_product TYPE string \
    ASSERT $value IN ['active', 'archived'];
DEFINE FIELD created_at ON TABLE retail_product TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE retail_product TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_product_business ON TABLE retail_product \
    COLUMNS business_id;
";

// -----------------------------------------------------------------------
// Public API
// -----------------------------------------------------------------------

/// Run all pending migrations against the given SurrealDB client.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
/// All DEFINE statements are idempotent so re-running is safe.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    // Ensure migration tracking table exists (idempotent).
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    // Determine current schema version.
    let mut result = db
        .query("SELECT * FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version > current_version {
            info!(
                version = migration.version,
                name = migration.name,
                "Applying migration"
            );
            db.query(migration.sql).await?.check().map_err(|e| {
                DbError::Migration(format!(
                    "Migration v{} '{}' failed: {}",
                    migration.version, migration.name, e,
                ))
            })?;

            // Record the applied migration.
            db.query(
                "CREATE _migration SET version = $version, \
                 name = $name",
            )
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "Failed to record migration v{}: {}",
                    migration.version, e,
                ))
            })?;

            info!(
                version = migration.version,
                "Migration applied successfully"
            );
        }
    }

    Ok(())
}

/// Returns the raw schema DDL for version 1.
///
/// Exposed for testing with in-memory SurrealDB instances that
/// bypass the migration runner.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}
