//! Customer entity representing one client contact in the directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The five caller-supplied fields of a customer record
///
/// Used as the input to both the create and the update operation. The
/// `id` and creation timestamp are never caller-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    /// Contact name
    pub name: String,

    /// Contact email, unique across all customers
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Postal address, optional
    pub address: Option<String>,

    /// Postal code
    pub pincode: String,
}

/// Customer entity representing one client contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, assigned on creation
    pub id: Uuid,

    /// Contact name
    pub name: String,

    /// Contact email, unique across all customers
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Postal address, optional
    pub address: Option<String>,

    /// Postal code
    pub pincode: String,

    /// Timestamp when the record was created, immutable thereafter
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new customer from caller-supplied fields
    ///
    /// Assigns a fresh UUID and stamps the creation time.
    pub fn new(draft: CustomerDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            pincode: draft.pincode,
            created_at: Utc::now(),
        }
    }

    /// Overwrites the five mutable fields in place
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, draft: CustomerDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.phone = draft.phone;
        self.address = draft.address;
        self.pincode = draft.pincode;
    }

    /// Checks whether `term` is a case-insensitive substring of the
    /// name, email, or phone field
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.phone.to_lowercase().contains(&term)
    }
}
