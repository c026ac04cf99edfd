use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::schema::SQLITE_INIT;

pub type SqlitePool = Pool<Sqlite>;

/// Process-wide handle to the clinic store. Clones share the same pool.
#[derive(Clone)]
pub struct ClinicStorage {
    pool: SqlitePool,
}

impl ClinicStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the SQLite file at `path`, creating it if missing.
    ///
    /// The pool is capped at one connection: a single logical store
    /// connection shared by all request handlers, with SQLite serializing
    /// writes behind it.
    pub async fn connect(path: &str) -> Result<Self> {
        let connect_opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<()> {
        // execute one statement at a time (sqlx::query rejects multi-commands)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }
}
