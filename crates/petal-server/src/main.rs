//! Petal Server — application entry point.
//!
//! All ambient configuration is resolved here, at the boundary: the
//! default business slug comes from `PETAL_SITE_SLUG`, the store
//! connection from `PETAL_DB_*`. The resolution core itself is a pure
//! function of its explicit inputs plus the store.

use clap::{Parser, Subcommand};
use petal_db::repository::{
    SurrealBusinessRepository, SurrealPageRepository, SurrealPreviewTokenRepository,
    SurrealProductRepository, SurrealSectionRepository,
};
use petal_db::{DbConfig, DbManager};
use petal_render::RenderedSection;
use petal_resolve::{PageResolver, ProductCatalog, SectionResolver};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "petal", about = "Multi-tenant landing-page read path")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve and render a page as JSON.
    Render {
        /// Business slug; defaults to $PETAL_SITE_SLUG.
        #[arg(long)]
        business: Option<String>,
        /// Page slug within the business.
        #[arg(long, default_value = "home")]
        page: String,
        /// Preview token for draft visibility.
        #[arg(long)]
        token: Option<String>,
    },
    /// List a business's active products as JSON.
    Products {
        /// Business slug; defaults to $PETAL_SITE_SLUG.
        #[arg(long)]
        business: Option<String>,
    },
}

#[derive(Serialize)]
struct PageEnvelope {
    page_id: Option<Uuid>,
    page_name: Option<String>,
    draft_mode: bool,
    cache_max_age: Option<u32>,
    sections: Vec<SectionEnvelope>,
}

#[derive(Serialize)]
struct SectionEnvelope {
    section_id: Uuid,
    section_key: String,
    component: String,
    content: Value,
    view: RenderedSection,
}

/// Default-tenant selection happens here and nowhere deeper.
fn business_slug(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var("PETAL_SITE_SLUG").ok())
        .unwrap_or_else(|| "default".into())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(error = %e, "failed to serialize output"),
    }
}

async fn render_page(db: &DbManager, business: String, page_slug: String, token: Option<String>) {
    let client = db.client().clone();
    let resolver = PageResolver::new(
        SurrealBusinessRepository::new(client.clone()),
        SurrealPageRepository::new(client.clone()),
    );

    let Some(page) = resolver.resolve(&business, &page_slug).await else {
        // Public pages degrade to a "not configured" shell.
        print_json(&PageEnvelope {
            page_id: None,
            page_name: None,
            draft_mode: false,
            cache_max_age: None,
            sections: Vec::new(),
        });
        return;
    };

    let sections = SectionResolver::new(
        SurrealSectionRepository::new(client.clone()),
        SurrealPreviewTokenRepository::new(client),
    )
    .resolve(page.id, token.as_deref())
    .await;

    let cache_max_age = sections.cache_max_age();
    let envelope = PageEnvelope {
        page_id: Some(page.id),
        page_name: Some(page.name),
        draft_mode: sections.draft_mode,
        cache_max_age,
        sections: sections
            .sections
            .into_iter()
            .map(|section| {
                let view = petal_render::dispatch(&section.component, &section.content);
                SectionEnvelope {
                    section_id: section.id,
                    section_key: section.key,
                    component: section.component,
                    content: section.content,
                    view,
                }
            })
            .collect(),
    };

    print_json(&envelope);
}

async fn list_products(db: &DbManager, business: String) {
    let client = db.client().clone();
    let catalog = ProductCatalog::new(
        SurrealBusinessRepository::new(client.clone()),
        SurrealProductRepository::new(client),
    );
    let products = catalog.list(&business).await;
    print_json(&products);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("petal=info".parse().expect("valid directive")),
        )
        .json()
        .init();

    let cli = Cli::parse();

    let db = match DbManager::connect(&DbConfig::from_env()).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "failed to connect to SurrealDB");
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Render {
            business,
            page,
            token,
        } => render_page(&db, business_slug(business), page, token).await,
        Command::Products { business } => list_products(&db, business_slug(business)).await,
    }
}
