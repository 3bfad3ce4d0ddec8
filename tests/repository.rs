use zillow_customers::domain::customer::{NewCustomer, UpdateCustomer};
use zillow_customers::domain::types::{CustomerEmail, CustomerId};
use zillow_customers::repository::{CustomerListQuery, CustomerReader, CustomerWriter};

mod common;

fn new_customer(first_name: &str, actor: &str) -> NewCustomer {
    NewCustomer::new(
        first_name.to_string(),
        "Doe".to_string(),
        None,
        Some(CustomerEmail::new(format!("{first_name}@example.com")).unwrap()),
        common::actor(actor),
    )
}

#[test]
fn test_customer_repository_crud() {
    let test_db = common::TestDb::new("test_customer_repository_crud.db");
    let repo = test_db.repo();

    let alice = repo.create_customer(&new_customer("alice", "u1")).unwrap();
    let bob = repo.create_customer(&new_customer("bob", "u1")).unwrap();
    assert_ne!(alice.id, bob.id);
    assert_eq!(alice.created_by.as_str(), "u1");
    assert_eq!(alice.updated_at, None);
    assert!(!alice.is_delete);

    assert_eq!(repo.count_customers().unwrap(), 2);

    let fetched = repo.get_customer_by_id(alice.id).unwrap().unwrap();
    assert_eq!(fetched, alice);

    let mut changed = bob.clone();
    changed.apply_update(
        UpdateCustomer::new("Bobby".to_string(), "Ray".to_string(), Some("42".to_string()), None),
        &common::actor("u2"),
    );
    let saved = repo.save_customer(&changed).unwrap();
    assert_eq!(saved.first_name, "Bobby");
    assert_eq!(saved.last_name, "Ray");
    assert_eq!(saved.phone_number.as_deref(), Some("42"));
    assert_eq!(saved.email, None);
    assert_eq!(saved.updated_by.as_ref().map(|a| a.as_str()), Some("u2"));
    assert_eq!(saved.created_by.as_str(), "u1");

    let mut deleted = saved.clone();
    deleted.soft_delete(&common::actor("u3"));
    repo.save_customer(&deleted).unwrap();

    let still_there = repo.get_customer_by_id(bob.id).unwrap().unwrap();
    assert!(still_there.is_delete);
    assert_eq!(repo.count_customers().unwrap(), 2);
}

#[test]
fn test_get_missing_customer_returns_none() {
    let test_db = common::TestDb::new("test_get_missing_customer_returns_none.db");
    let repo = test_db.repo();

    assert!(
        repo.get_customer_by_id(CustomerId::new(99).unwrap())
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_list_customers_pages_in_id_order() {
    let test_db = common::TestDb::new("test_list_customers_pages_in_id_order.db");
    let repo = test_db.repo();

    for i in 0..7 {
        repo.create_customer(&new_customer(&format!("c{i}"), "u1"))
            .unwrap();
    }

    let all = repo.list_customers(CustomerListQuery::new()).unwrap();
    assert_eq!(all.len(), 7);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    let second = repo
        .list_customers(CustomerListQuery::new().paginate(2, 3))
        .unwrap();
    assert_eq!(second.len(), 3);
    assert_eq!(second[0].id, all[3].id);

    let last = repo
        .list_customers(CustomerListQuery::new().paginate(3, 3))
        .unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].id, all[6].id);
}
