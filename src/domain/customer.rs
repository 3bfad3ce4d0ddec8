use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ActorId, CustomerEmail, CustomerId};

/// Customer record as persisted in the `customers` table.
///
/// Rows are never physically removed; deletion flips `is_delete` and stamps
/// the audit columns.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email: Option<CustomerEmail>,
    pub created_at: NaiveDateTime,
    pub created_by: ActorId,
    pub updated_at: Option<NaiveDateTime>,
    pub updated_by: Option<ActorId>,
    pub is_delete: bool,
}

impl Customer {
    /// Overlays every profile field of `update` onto this customer and stamps
    /// the update audit columns.
    pub fn apply_update(&mut self, update: UpdateCustomer, actor: &ActorId) {
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.phone_number = update.phone_number;
        self.email = update.email;
        self.touch(actor);
    }

    /// Marks the customer as deleted without erasing it.
    pub fn soft_delete(&mut self, actor: &ActorId) {
        self.is_delete = true;
        self.touch(actor);
    }

    fn touch(&mut self, actor: &ActorId) {
        self.updated_at = Some(Utc::now().naive_utc());
        self.updated_by = Some(actor.clone());
    }
}

/// Data required to insert a customer.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email: Option<CustomerEmail>,
    pub created_at: NaiveDateTime,
    pub created_by: ActorId,
}

impl NewCustomer {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        phone_number: Option<String>,
        email: Option<CustomerEmail>,
        created_by: ActorId,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            phone_number: normalize_phone(phone_number),
            email,
            created_at: Utc::now().naive_utc(),
            created_by,
        }
    }
}

/// Profile fields replaced by an update.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email: Option<CustomerEmail>,
}

impl UpdateCustomer {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        phone_number: Option<String>,
        email: Option<CustomerEmail>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            phone_number: normalize_phone(phone_number),
            email,
        }
    }
}

fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> Customer {
        Customer {
            id: CustomerId::new(1).unwrap(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            phone_number: None,
            email: None,
            created_at: Utc::now().naive_utc(),
            created_by: ActorId::new("u1").unwrap(),
            updated_at: None,
            updated_by: None,
            is_delete: false,
        }
    }

    #[test]
    fn new_customer_trims_and_drops_blank_phone() {
        let new = NewCustomer::new(
            " Ann ".to_string(),
            "Lee ".to_string(),
            Some("   ".to_string()),
            None,
            ActorId::new("u1").unwrap(),
        );
        assert_eq!(new.first_name, "Ann");
        assert_eq!(new.last_name, "Lee");
        assert_eq!(new.phone_number, None);
        assert_eq!(new.created_by.as_str(), "u1");
    }

    #[test]
    fn apply_update_overlays_fields_and_stamps_audit() {
        let mut customer = sample_customer();
        let actor = ActorId::new("u2").unwrap();
        let email = CustomerEmail::new("bob@example.com").unwrap();

        customer.apply_update(
            UpdateCustomer::new(
                "Bob".to_string(),
                "Ray".to_string(),
                Some("555".to_string()),
                Some(email.clone()),
            ),
            &actor,
        );

        assert_eq!(customer.first_name, "Bob");
        assert_eq!(customer.last_name, "Ray");
        assert_eq!(customer.phone_number.as_deref(), Some("555"));
        assert_eq!(customer.email, Some(email));
        assert_eq!(customer.updated_by, Some(actor));
        assert!(customer.updated_at.is_some());
        assert_eq!(customer.created_by.as_str(), "u1");
        assert!(!customer.is_delete);
    }

    #[test]
    fn soft_delete_sets_flag_and_keeps_profile() {
        let mut customer = sample_customer();
        let actor = ActorId::new("u3").unwrap();

        customer.soft_delete(&actor);

        assert!(customer.is_delete);
        assert_eq!(customer.updated_by, Some(actor));
        assert!(customer.updated_at.is_some());
        assert_eq!(customer.first_name, "Ann");
    }
}
