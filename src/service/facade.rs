use super::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::{str::FromStr as _, time::Duration};
use tokio::sync::OnceCell;

/// A set of models bound to one SQLite database.
///
/// The pool is opened on first use. Every connect and execute makes sure the
/// tables of all known models exist first.
///
/// [`connect`](Self::connect) and [`execute`](Self::execute) log engine failures
/// and return `None`; the `try_` variants hand the error back instead.
#[derive(Debug)]
pub struct Service {
    db_path: String,
    max_connections: u32,
    models: Vec<Model>,
    pool: OnceCell<SqlitePool>,
}

impl Service {
    pub fn new(db_path: impl Into<String>, models: impl IntoIterator<Item = Model>) -> Self {
        Self {
            db_path: db_path.into(),
            max_connections: 1,
            models: models.into_iter().collect(),
            pool: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config, models: impl IntoIterator<Item = Model>) -> Self {
        Self::new(config.db_path.clone(), models).with_max_connections(config.max_connections)
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub async fn try_connect(&self) -> Result<SqlitePool> {
        let pool = self.pool.get_or_try_init(|| self.open()).await?;
        self.ensure_tables(pool).await?;
        Ok(pool.clone())
    }

    pub async fn connect(&self) -> Option<SqlitePool> {
        match self.try_connect().await {
            Ok(pool) => Some(pool),
            Err(e) => {
                error!("Failed to connect to `{}`: {e}", self.db_path);
                None
            }
        }
    }

    /// Run `sql` in its own transaction and commit it.
    pub async fn try_execute(&self, sql: &str) -> Result<Vec<Row>> {
        let pool = self.try_connect().await?;
        debug!("Executing `{sql}`");
        let mut tx = pool.begin().await?;
        let rows = sqlx::query(sqlx::AssertSqlSafe(sql.to_owned()))
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        rows.iter().map(decode_row).collect()
    }

    pub async fn execute(&self, sql: &str) -> Option<Vec<Row>> {
        match self.try_execute(sql).await {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Failed to execute `{sql}`: {e}");
                None
            }
        }
    }

    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
        }
    }

    async fn open(&self) -> Result<SqlitePool> {
        let options = if self.db_path.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(&self.db_path)?
        } else {
            SqliteConnectOptions::new().filename(&self.db_path)
        };
        let options = options.create_if_missing(true);

        debug!("Opening `{}`", self.db_path);
        // No idle reaping: an in-memory database lives only as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;
        Ok(pool)
    }

    async fn ensure_tables(&self, pool: &SqlitePool) -> Result {
        for model in &self.models {
            let ddl = model.sql_create_table_if_not_exists();
            trace!("{ddl}");
            sqlx::query(sqlx::AssertSqlSafe(ddl)).execute(pool).await?;
        }
        Ok(())
    }
}
