//! Repository implementation for customers.

use diesel::prelude::*;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::types::CustomerId;
use crate::models::customer::{
    Customer as DbCustomer, NewCustomer as DbNewCustomer, SaveCustomer as DbSaveCustomer,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter, DieselRepository};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let customer = customers::table
            .find(id.get())
            .select(DbCustomer::as_select())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        customer
            .map(Customer::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn count_customers(&self) -> RepositoryResult<usize> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let total: i64 = customers::table.count().get_result(&mut conn)?;

        Ok(total as usize)
    }

    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let mut items = customers::table
            .order(customers::id.asc())
            .select(DbCustomer::as_select())
            .into_boxed();

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset() as i64)
                .limit(pagination.per_page as i64);
        }

        items
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(|db_customer| Customer::try_from(db_customer).map_err(RepositoryError::from))
            .collect()
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let insertable: DbNewCustomer = new_customer.into();

        let created = diesel::insert_into(customers::table)
            .values(&insertable)
            .returning(DbCustomer::as_returning())
            .get_result::<DbCustomer>(&mut conn)?;

        Customer::try_from(created).map_err(RepositoryError::from)
    }

    fn save_customer(&self, customer: &Customer) -> RepositoryResult<Customer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let changes: DbSaveCustomer = customer.into();

        let saved = diesel::update(customers::table.find(customer.id.get()))
            .set(&changes)
            .returning(DbCustomer::as_returning())
            .get_result::<DbCustomer>(&mut conn)?;

        Customer::try_from(saved).map_err(RepositoryError::from)
    }
}
