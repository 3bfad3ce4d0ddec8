//! Incoming customer payloads and their conversion into domain values.

use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};
use crate::domain::types::{ActorId, CustomerEmail, TypeConstraintError};

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload for registering a new customer.
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload replacing the profile of an existing customer.
pub struct UpdateCustomerRequest {
    /// Must match the id of the customer being updated.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

fn parse_email(email: Option<String>) -> Result<Option<CustomerEmail>, TypeConstraintError> {
    email.map(CustomerEmail::new).transpose()
}

impl CreateCustomerRequest {
    /// Converts the payload into a [`NewCustomer`] created by `actor`.
    pub fn into_new_customer(self, actor: ActorId) -> Result<NewCustomer, TypeConstraintError> {
        Ok(NewCustomer::new(
            self.first_name,
            self.last_name,
            self.phone_number,
            parse_email(self.email)?,
            actor,
        ))
    }
}

impl TryFrom<UpdateCustomerRequest> for UpdateCustomer {
    type Error = TypeConstraintError;

    fn try_from(request: UpdateCustomerRequest) -> Result<Self, Self::Error> {
        Ok(UpdateCustomer::new(
            request.first_name,
            request.last_name,
            request.phone_number,
            parse_email(request.email)?,
        ))
    }
}
