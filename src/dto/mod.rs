//! DTOs returned by the customer services.

pub mod customer;
