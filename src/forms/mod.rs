//! Request payloads accepted by the customer services.

pub mod customer;
