use std::time::Duration;

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use zillow_customers::db::establish_connection_pool;
use zillow_customers::schema::customers;

mod common;

#[derive(QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = BigInt)]
    timeout: i64,
}

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

#[test]
fn test_creates_migrated_db_file() {
    let test_db = common::TestDb::new("test_creates_migrated_db_file.db");
    let mut conn = test_db.pool().get().unwrap();

    let total: i64 = customers::table.count().get_result(&mut conn).unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_every_pooled_connection_gets_busy_timeout_and_wal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_pooled_connection_pragmas.db");
    let pool =
        establish_connection_pool(path.to_str().unwrap(), Duration::from_millis(2500)).unwrap();

    // Hold every connection at once so each one went through the customizer.
    let mut held = Vec::new();
    for _ in 0..pool.max_size() {
        held.push(pool.get().unwrap());
    }

    for conn in &mut held {
        let timeout = diesel::sql_query("PRAGMA busy_timeout")
            .get_result::<BusyTimeout>(conn)
            .unwrap();
        assert_eq!(timeout.timeout, 2500);

        let mode = diesel::sql_query("PRAGMA journal_mode")
            .get_result::<JournalMode>(conn)
            .unwrap();
        assert_eq!(mode.journal_mode.to_lowercase(), "wal");
    }
}
