//! Database and configuration models shared across the customer repository.

pub mod config;
pub mod customer;
