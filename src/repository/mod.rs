//! Storage seams for customers and their Diesel implementation.

use crate::db::{DbConnection, DbPool, connection_pool_from_config, get_connection};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::types::CustomerId;
use crate::models::config::DirectoryConfig;
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows preceding this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.per_page
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListQuery {
    pub pagination: Option<Pagination>,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    fn count_customers(&self) -> RepositoryResult<usize>;
    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<Vec<Customer>>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    /// Writes every mutable column of `customer` back to its row.
    fn save_customer(&self, customer: &Customer) -> RepositoryResult<Customer>;
}

/// Diesel-backed repository shared by all customer services.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Builds the pool described by `config` and wraps it.
    pub fn from_config(config: &DirectoryConfig) -> RepositoryResult<Self> {
        let pool = connection_pool_from_config(config)?;
        Ok(Self::new(pool))
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
