//! Database connection helpers.
//!
//! Every repository call checks a connection out of an r2d2 pool and returns
//! it when the call completes, so no session outlives a unit of work.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use log::error;

use crate::models::config::DirectoryConfig;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Debug)]
/// Pragmas applied each time a connection is acquired from the pool.
///
/// The busy timeout goes first: switching to WAL takes a lock that other
/// connections opened in parallel may already hold.
struct SqlitePragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL; \
             PRAGMA synchronous = NORMAL; PRAGMA foreign_keys = ON;",
            self.busy_timeout.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given SQLite database URL.
pub fn establish_connection_pool(
    database_url: &str,
    busy_timeout: Duration,
) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas { busy_timeout }))
        .build(manager)
}

/// Create a connection pool from the loaded [`DirectoryConfig`].
pub fn connection_pool_from_config(config: &DirectoryConfig) -> Result<DbPool, PoolError> {
    establish_connection_pool(
        &config.database_url,
        Duration::from_secs(config.busy_timeout_secs),
    )
}

/// Check a connection out of the pool.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().map_err(|e| {
        error!("Failed to get connection from pool: {e}");
        e
    })
}
