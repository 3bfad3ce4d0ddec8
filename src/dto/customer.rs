//! Read-only customer projection handed to callers.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::customer::Customer;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerView {
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

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.get(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            phone_number: customer.phone_number,
            email: customer.email.map(String::from),
            created_at: customer.created_at,
            created_by: customer.created_by.into_inner(),
            updated_at: customer.updated_at,
            updated_by: customer.updated_by.map(String::from),
            is_delete: customer.is_delete,
        }
    }
}
