use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer};
use crate::domain::types::{ActorId, CustomerEmail, CustomerId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
    pub created_by: String,
    pub updated_at: Option<NaiveDateTime>,
    pub updated_by: Option<String>,
    pub is_delete: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone_number: Option<&'a str>,
    pub email: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub created_by: &'a str,
    pub is_delete: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(treat_none_as_null = true)]
/// Full-row changeset written back when a [`Customer`] is saved.
pub struct SaveCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone_number: Option<&'a str>,
    pub email: Option<&'a str>,
    pub updated_at: Option<NaiveDateTime>,
    pub updated_by: Option<&'a str>,
    pub is_delete: bool,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CustomerId::new(customer.id)?,
            first_name: customer.first_name,
            last_name: customer.last_name,
            phone_number: customer.phone_number,
            email: customer.email.map(CustomerEmail::new).transpose()?,
            created_at: customer.created_at,
            created_by: ActorId::new(customer.created_by)?,
            updated_at: customer.updated_at,
            updated_by: customer.updated_by.map(ActorId::new).transpose()?,
            is_delete: customer.is_delete,
        })
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            phone_number: customer.phone_number.as_deref(),
            email: customer.email.as_ref().map(CustomerEmail::as_str),
            created_at: customer.created_at,
            created_by: customer.created_by.as_str(),
            is_delete: false,
        }
    }
}

impl<'a> From<&'a DomainCustomer> for SaveCustomer<'a> {
    fn from(customer: &'a DomainCustomer) -> Self {
        Self {
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            phone_number: customer.phone_number.as_deref(),
            email: customer.email.as_ref().map(CustomerEmail::as_str),
            updated_at: customer.updated_at,
            updated_by: customer.updated_by.as_ref().map(ActorId::as_str),
            is_delete: customer.is_delete,
        }
    }
}
