//! Connection handling for the content store.

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::info;

/// Where and how to reach the content store. Resolved once at process
/// start from `PETAL_DB_*` variables; nothing deeper in the stack
/// reads the environment.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "petal".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

impl DbConfig {
    /// Read `PETAL_DB_URL`, `PETAL_DB_NAMESPACE`, `PETAL_DB_DATABASE`,
    /// `PETAL_DB_USERNAME`, and `PETAL_DB_PASSWORD`, keeping the local
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            url: get("PETAL_DB_URL").unwrap_or(defaults.url),
            namespace: get("PETAL_DB_NAMESPACE").unwrap_or(defaults.namespace),
            database: get("PETAL_DB_DATABASE").unwrap_or(defaults.database),
            username: get("PETAL_DB_USERNAME").unwrap_or(defaults.username),
            password: get("PETAL_DB_PASSWORD").unwrap_or(defaults.password),
        }
    }
}

/// A live connection to the content store.
///
/// Authenticates as root: preview-token lookups must see rows of every
/// tenant (the validator above is the trust boundary), and public
/// content reads must not depend on a row-level access policy being
/// configured consistently across tables.
#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    /// Open a WebSocket connection, authenticate, and select the
    /// configured namespace and database.
    pub async fn connect(config: &DbConfig) -> Result<Self, surrealdb::Error> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "connecting to content store"
        );

        let db = Surreal::new::<Ws>(&config.url).await?;

        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        info!("content store connection ready");

        Ok(Self { db })
    }

    pub fn client(&self) -> &Surreal<Client> {
        &self.db
    }
}
