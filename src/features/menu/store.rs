use async_trait::async_trait;
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};

use crate::core::error::AppError;
use crate::features::menu::dto::MenuItemRecord;

const ALL_ITEMS_SQL: &str =
    "SELECT name, category, subcategory, price FROM menu ORDER BY category, name";
const CATEGORY_ITEMS_SQL: &str =
    "SELECT name, category, subcategory, price FROM menu WHERE category = $1 ORDER BY name";

/// Read-only access to the `menu` table. Implementations must return rows
/// already ordered: `fetch_all` by `(category, name)`, `fetch_category` by
/// `name`.
#[async_trait]
pub trait MenuStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<MenuItemRecord>, AppError>;
    async fn fetch_category(&self, category: &str) -> Result<Vec<MenuItemRecord>, AppError>;
}

/// Opens one connection per call and releases it on every exit path; no
/// pooled or long-lived handle.
pub struct PostgresMenuStore {
    database_url: String,
}

impl PostgresMenuStore {
    pub fn new(database_url: String) -> Self {
        Self { database_url }
    }

    async fn run_query(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<MenuItemRecord>, AppError> {
        let (client, connection) = tokio_postgres::connect(&self.database_url, NoTls)
            .await
            .map_err(|err| AppError::storage(format!("failed to open menu database: {err}")))?;

        let driver = tokio::spawn(async move {
            if let Err(err) = connection.await {
                tracing::warn!(%err, "menu database connection error");
            }
        });

        let result = client
            .query(sql, params)
            .await
            .map_err(|err| AppError::storage(format!("menu query failed: {err}")));

        // Dropping the client closes the connection on success and failure
        // alike; waiting for the driver task completes the teardown.
        drop(client);
        let _ = driver.await;

        let rows = result?;
        rows.iter().map(row_to_record).collect()
    }
}

#[async_trait]
impl MenuStore for PostgresMenuStore {
    async fn fetch_all(&self) -> Result<Vec<MenuItemRecord>, AppError> {
        self.run_query(ALL_ITEMS_SQL, &[]).await
    }

    async fn fetch_category(&self, category: &str) -> Result<Vec<MenuItemRecord>, AppError> {
        self.run_query(CATEGORY_ITEMS_SQL, &[&category]).await
    }
}

fn row_to_record(row: &Row) -> Result<MenuItemRecord, AppError> {
    let read_err = |err: tokio_postgres::Error| {
        AppError::storage(format!("failed to read menu row: {err}"))
    };

    Ok(MenuItemRecord {
        name: row.try_get("name").map_err(read_err)?,
        category: row.try_get("category").map_err(read_err)?,
        subcategory: row.try_get("subcategory").map_err(read_err)?,
        price: row.try_get("price").map_err(read_err)?,
    })
}
