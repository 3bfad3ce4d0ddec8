//! Customer directory for the listing platform backend.
//!
//! Customers are stored in SQLite through Diesel. The operations in
//! [`services::customer`] list them page by page, fetch them by id, create
//! and update them from request payloads and soft-delete them.
//!
//! ```no_run
//! use zillow_customers::domain::types::ActorId;
//! use zillow_customers::models::config::DirectoryConfig;
//! use zillow_customers::repository::DieselRepository;
//! use zillow_customers::services::customer::{create_customer, list_customers};
//! use zillow_customers::forms::customer::CreateCustomerRequest;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DirectoryConfig::load()?;
//! let repo = DieselRepository::from_config(&config)?;
//!
//! let request = CreateCustomerRequest {
//!     first_name: "Ann".into(),
//!     last_name: "Lee".into(),
//!     phone_number: None,
//!     email: Some("ann@example.com".into()),
//! };
//! let id = create_customer(&repo, request, &ActorId::new("agent-1")?)?;
//! let page = list_customers(&repo, 1, 20)?;
//! assert!(page.data.iter().any(|c| c.id == id.get()));
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;
pub mod services;
