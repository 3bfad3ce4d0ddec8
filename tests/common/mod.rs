#![allow(dead_code)]

use std::time::Duration;

use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;
use zillow_customers::db::{DbPool, establish_connection_pool};
use zillow_customers::domain::types::ActorId;
use zillow_customers::forms::customer::CreateCustomerRequest;
use zillow_customers::repository::DieselRepository;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database file living in its own temporary directory, migrated to
/// the latest schema. The directory is removed when the value is dropped.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(
            path.to_str().expect("utf-8 temp path"),
            Duration::from_secs(5),
        )
        .expect("create pool");

        {
            let mut pooled = pool.get().expect("get connection");
            let conn: &mut SqliteConnection = &mut pooled;
            conn.run_pending_migrations(MIGRATIONS)
                .expect("run migrations");
        }

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub fn actor(name: &str) -> ActorId {
    ActorId::new(name).expect("valid actor")
}

pub fn create_request(first_name: &str) -> CreateCustomerRequest {
    CreateCustomerRequest {
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        phone_number: Some("+1 555 0100".to_string()),
        email: Some(format!("{}@example.com", first_name.to_lowercase())),
    }
}
