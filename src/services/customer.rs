//! The customer directory: paginated listing, lookup, creation, update and
//! soft deletion of customers.
//!
//! Every operation takes the store handle explicitly. Mutations read the row
//! once and write it once; there is no locking between the two, so concurrent
//! updates of the same customer are last-writer-wins.

use validator::Validate;

use crate::domain::customer::{Customer, UpdateCustomer};
use crate::domain::types::{ActorId, CustomerId};
use crate::dto::customer::CustomerView;
use crate::forms::customer::{CreateCustomerRequest, UpdateCustomerRequest};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PagingResult, normalize_page, pages_count};
use crate::repository::errors::RepositoryError;
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

const ENTITY_NAME: &str = "Customer";

/// Returns one page of customers.
///
/// A `page` outside `1..=pages_count` yields the first page instead of an
/// error, and a zero `page_size` falls back to [`DEFAULT_ITEMS_PER_PAGE`].
/// Soft-deleted customers are included.
pub fn list_customers<R>(
    repo: &R,
    page: usize,
    page_size: usize,
) -> ServiceResult<PagingResult<CustomerView>>
where
    R: CustomerReader + ?Sized,
{
    let page_size = if page_size == 0 {
        DEFAULT_ITEMS_PER_PAGE
    } else {
        page_size
    };

    let total = repo.count_customers()?;
    let pages_count = pages_count(total, page_size);
    let current_page = normalize_page(page, pages_count);
    if current_page != page {
        log::debug!("Requested page {page} is outside 1..={pages_count}, using page 1");
    }

    let customers =
        repo.list_customers(CustomerListQuery::new().paginate(current_page, page_size))?;

    Ok(PagingResult::new(customers, current_page, pages_count).map(CustomerView::from))
}

/// Returns the customer with the given id, deleted or not.
pub fn get_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<CustomerView>
where
    R: CustomerReader + ?Sized,
{
    find_customer(repo, customer_id).map(CustomerView::from)
}

/// Persists a new customer created by `actor` and returns its id.
pub fn create_customer<R>(
    repo: &R,
    request: CreateCustomerRequest,
    actor: &ActorId,
) -> ServiceResult<CustomerId>
where
    R: CustomerWriter + ?Sized,
{
    if let Err(err) = request.validate() {
        log::error!("Failed to validate customer: {err}");
        return Err(ServiceError::Validation(err.to_string()));
    }

    let new_customer = request.into_new_customer(actor.clone())?;
    let customer = repo.create_customer(&new_customer)?;

    log::info!("Customer {} created by {actor}", customer.id);
    Ok(customer.id)
}

/// Replaces the profile of an existing customer.
///
/// Fails with [`ServiceError::NotFound`] when the customer does not exist
/// and with [`ServiceError::IdMismatch`] when `request.id` differs from
/// `customer_id`. In both cases nothing is written.
pub fn update_customer<R>(
    repo: &R,
    customer_id: i32,
    request: UpdateCustomerRequest,
    actor: &ActorId,
) -> ServiceResult<CustomerId>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let mut customer = find_customer(repo, customer_id)?;

    if request.id != customer_id {
        return Err(ServiceError::IdMismatch {
            id: customer_id,
            payload_id: request.id,
        });
    }

    if let Err(err) = request.validate() {
        log::error!("Failed to validate customer {customer_id}: {err}");
        return Err(ServiceError::Validation(err.to_string()));
    }

    customer.apply_update(UpdateCustomer::try_from(request)?, actor);
    let saved = repo.save_customer(&customer).map_err(not_found_as_customer)?;

    log::info!("Customer {} updated by {actor}", saved.id);
    Ok(saved.id)
}

/// Flags the customer as deleted. The row stays readable afterwards.
pub fn delete_customer<R>(repo: &R, customer_id: i32, actor: &ActorId) -> ServiceResult<CustomerId>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let mut customer = find_customer(repo, customer_id)?;

    customer.soft_delete(actor);
    let saved = repo.save_customer(&customer).map_err(not_found_as_customer)?;

    log::info!("Customer {} deleted by {actor}", saved.id);
    Ok(saved.id)
}

/// A row removed between the read and the write is still a missing customer.
fn not_found_as_customer(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound => ServiceError::NotFound(ENTITY_NAME),
        other => ServiceError::Repository(other),
    }
}

/// Non-positive ids can never match a row, so they are reported as missing.
fn find_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    let Ok(id) = CustomerId::new(customer_id) else {
        return Err(ServiceError::NotFound(ENTITY_NAME));
    };

    repo.get_customer_by_id(id)?
        .ok_or(ServiceError::NotFound(ENTITY_NAME))
}
