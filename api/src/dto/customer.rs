use serde::{Deserialize, Serialize};
use validator::Validate;

use crm_core::domain::entities::customer::CustomerDraft;

/// Body of the create and update customer endpoints
///
/// Validation stops at required fields: the four mandatory ones must be
/// non-empty, the address may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerPayload {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    pub address: Option<String>,

    #[validate(length(min = 1, message = "pincode is required"))]
    pub pincode: String,
}

impl From<CustomerPayload> for CustomerDraft {
    fn from(payload: CustomerPayload) -> Self {
        CustomerDraft {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            pincode: payload.pincode,
        }
    }
}

/// Query string of the customer search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Free-text term; missing or empty matches all customers
    #[serde(default)]
    pub search: String,
}
