//! Integration tests for the read-path repository implementations
//! using in-memory SurrealDB.
//!
//! Rows are seeded with raw queries: in production these tables are
//! written by the external editor/provisioning systems, and the
//! repositories under test are intentionally read-only.

use chrono::{Duration, Utc};
use petal_core::error::PetalError;
use petal_core::models::{ProductStatus, PublishStatus};
use petal_core::repository::{
    BusinessRepository, PageRepository, PreviewTokenRepository, ProductRepository,
    SectionRepository,
};
use petal_db::repository::{
    SurrealBusinessRepository, SurrealPageRepository, SurrealPreviewTokenRepository,
    SurrealProductRepository, SurrealSectionRepository,
};
use serde_json::json;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

type Db = Surreal<surrealdb::engine::local::Db>;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Db {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    petal_db::run_migrations(&db).await.unwrap();
    db
}

async fn seed_business(db: &Db, slug: &str) -> Uuid {
    let id = Uuid::new_v4();
    db.query("CREATE type::record('business', $id) SET slug = $slug, name = $name")
        .bind(("id", id.to_string()))
        .bind(("slug", slug.to_string()))
        .bind(("name", format!("{slug} inc")))
        .await
        .unwrap()
        .check()
        .unwrap();
    id
}

async fn seed_page(db: &Db, org_id: Uuid, slug: &str) -> Uuid {
    let id = Uuid::new_v4();
    db.query(
        "CREATE type::record('page', $id) SET org_id = $org_id, \
         name = $name, slug = $slug, template = NONE, status = 'published'",
    )
    .bind(("id", id.to_string()))
    .bind(("org_id", org_id.to_string()))
    .bind(("name", format!("{slug} page")))
    .bind(("slug", slug.to_string()))
    .await
    .unwrap()
    .check()
    .unwrap();
    id
}

#[allow(clippy::too_many_arguments)]
async fn seed_section(
    db: &Db,
    page_id: Uuid,
    org_id: Uuid,
    key: &str,
    component: &str,
    position: i64,
    published: serde_json::Value,
    draft: serde_json::Value,
    status: &str,
) -> Uuid {
    let id = Uuid::new_v4();
    db.query(
        "CREATE type::record('page_section', $id) SET page_id = $page_id, \
         org_id = $org_id, key = $key, label = $label, component = $component, \
         position = $position, published_content = $published, \
         draft_content = $draft, status = $status",
    )
    .bind(("id", id.to_string()))
    .bind(("page_id", page_id.to_string()))
    .bind(("org_id", org_id.to_string()))
    .bind(("key", key.to_string()))
    .bind(("label", key.to_string()))
    .bind(("component", component.to_string()))
    .bind(("position", position))
    .bind(("published", published))
    .bind(("draft", draft))
    .bind(("status", status.to_string()))
    .await
    .unwrap()
    .check()
    .unwrap();
    id
}

// -----------------------------------------------------------------------
// Business
// -----------------------------------------------------------------------

#[tokio::test]
async fn business_lookup_by_slug() {
    let db = setup().await;
    let id = seed_business(&db, "acme").await;

    let repo = SurrealBusinessRepository::new(db);
    let business = repo.get_by_slug("acme").await.unwrap();

    assert_eq!(business.id, id);
    // Slug-match postcondition: one lookup is authoritative, no
    // defensive re-query needed.
    assert_eq!(business.slug, "acme");
}

#[tokio::test]
async fn business_unknown_slug_is_not_found() {
    let db = setup().await;
    seed_business(&db, "acme").await;

    let repo = SurrealBusinessRepository::new(db);
    let err = repo.get_by_slug("acme-2").await.unwrap_err();
    assert!(matches!(err, PetalError::NotFound { .. }), "got: {err:?}");
}

// -----------------------------------------------------------------------
// Page
// -----------------------------------------------------------------------

#[tokio::test]
async fn page_lookup_is_scoped_to_business() {
    let db = setup().await;
    let acme = seed_business(&db, "acme").await;
    let other = seed_business(&db, "other").await;
    let page_id = seed_page(&db, acme, "home").await;
    seed_page(&db, other, "home").await;

    let repo = SurrealPageRepository::new(db);
    let page = repo.get_by_slug(acme, "home").await.unwrap();
    assert_eq!(page.id, page_id);
    assert_eq!(page.org_id, acme);
    assert_eq!(page.status, PublishStatus::Published);

    // Same slug under a business that does not own it.
    let err = repo.get_by_slug(Uuid::new_v4(), "home").await.unwrap_err();
    assert!(matches!(err, PetalError::NotFound { .. }));
}

// -----------------------------------------------------------------------
// Sections
// -----------------------------------------------------------------------

#[tokio::test]
async fn sections_come_back_ordered_by_position() {
    let db = setup().await;
    let org = seed_business(&db, "acme").await;
    let page = seed_page(&db, org, "home").await;

    // Seed out of display order.
    seed_section(&db, page, org, "cta", "FinalCTA", 30, json!({}), json!({}), "published").await;
    seed_section(&db, page, org, "hero", "HeroSection", 10, json!({"title": "Hi"}), json!({}), "published").await;
    seed_section(&db, page, org, "reviews", "CustomerReviews", 20, json!({}), json!({}), "dirty").await;

    let repo = SurrealSectionRepository::new(db);
    let sections = repo.list_by_page(page).await.unwrap();

    let keys: Vec<&str> = sections.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["hero", "reviews", "cta"]);
    assert_eq!(sections[0].published_content, json!({"title": "Hi"}));
    assert_eq!(sections[1].status, PublishStatus::Dirty);
}

#[tokio::test]
async fn sections_for_unknown_page_are_empty() {
    let db = setup().await;
    let repo = SurrealSectionRepository::new(db);
    let sections = repo.list_by_page(Uuid::new_v4()).await.unwrap();
    assert!(sections.is_empty());
}

// -----------------------------------------------------------------------
// Preview tokens
// -----------------------------------------------------------------------

#[tokio::test]
async fn token_fetch_returns_expired_rows_too() {
    // Expiry is the validator's call — the repository must hand back
    // the row so "expired" can be told apart from "unknown".
    let db = setup().await;
    let org = seed_business(&db, "acme").await;
    let token = Uuid::new_v4().to_string();

    db.query(
        "CREATE type::record('preview_token', $id) SET org_id = $org_id, \
         page_id = NONE, section_id = NONE, user_id = NONE, \
         expires_at = $expires_at",
    )
    .bind(("id", token.clone()))
    .bind(("org_id", org.to_string()))
    .bind(("expires_at", Utc::now() - Duration::seconds(1)))
    .await
    .unwrap()
    .check()
    .unwrap();

    let repo = SurrealPreviewTokenRepository::new(db);
    let record = repo.get(&token).await.unwrap();
    assert_eq!(record.id, token);
    assert_eq!(record.org_id, org);
    assert!(record.expires_at <= Utc::now());
    assert!(record.page_id.is_none());
}

#[tokio::test]
async fn unknown_token_is_not_found() {
    let db = setup().await;
    let repo = SurrealPreviewTokenRepository::new(db);
    let err = repo.get("no-such-token").await.unwrap_err();
    assert!(matches!(err, PetalError::NotFound { .. }));
}

// -----------------------------------------------------------------------
// Products
// -----------------------------------------------------------------------

#[tokio::test]
async fn products_active_only_newest_first() {
    let db = setup().await;
    let business = seed_business(&db, "acme").await;

    let seed = async |name: &str, status: &str, age_secs: i64| {
        db.query(
            "CREATE type::record('retail_product', $id) SET \
             business_id = $business_id, name = $name, price = 24.99, \
             image_url = '', benefits = ['a', 'b', 'c', 'd'], \
             status = $status, created_at = $created_at",
        )
        .bind(("id", Uuid::new_v4().to_string()))
        .bind(("business_id", business.to_string()))
        .bind(("name", name.to_string()))
        .bind(("status", status.to_string()))
        .bind(("created_at", Utc::now() - Duration::seconds(age_secs)))
        .await
        .unwrap()
        .check()
        .unwrap();
    };

    seed("Old Oil", "active", 300).await;
    seed("Retired Soap", "archived", 200).await;
    seed("New Shampoo", "active", 100).await;

    let repo = SurrealProductRepository::new(db);
    let products = repo.list_active(business).await.unwrap();

    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["New Shampoo", "Old Oil"]);
    assert!(products.iter().all(|p| p.status == ProductStatus::Active));
    assert_eq!(products[0].price, 24.99);
    // Truncation to three benefits is the catalog's job, not the store's.
    assert_eq!(products[0].benefits.len(), 4);
}
