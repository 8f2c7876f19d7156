//! # Domain Model
//!
//! Core data types for the booking domain: customers, appointments and
//! available time slots.
//!
//! ## Instants
//!
//! All points in time cross the API boundary as epoch milliseconds (`i64`),
//! matching the wire contract of the transport layer. Conversion to and from
//! wall-clock values happens in [`crate::slots`]; nothing else in the crate
//! does date arithmetic.
//!
//! ## Identity
//!
//! [`CustomerId`] is a monotonically increasing integer assigned by the
//! [`crate::directory::CustomerDirectory`] on successful insert, starting at
//! zero. Identities are never reused and never recycled when validation
//! fails. Appointments reference customers by identity only; the full record
//! is joined back in at query time.
//!
//! ## Input vs. record
//!
//! [`Customer`] is the identity-less input shape: every field is optional so
//! partially filled forms can be represented and validated. On successful
//! insert the directory produces a [`CustomerRecord`], whose required fields
//! are owned strings and which is immutable from then on.

use serde::{Deserialize, Serialize};

use crate::validation::Field;

/// Identity assigned to a stored customer. Monotonic, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity-less customer input, as submitted by a form or API call.
///
/// All fields are optional to model partial and in-editing states; nothing is
/// enforced until [`crate::directory::CustomerDirectory::insert`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub notes: Option<String>,
}

impl Customer {
    pub fn new(first_name: &str, last_name: &str, phone_number: &str) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            phone_number: Some(phone_number.to_string()),
            notes: None,
        }
    }

    /// The raw value submitted for a customer field, or `None` for fields
    /// that do not belong to customers.
    pub fn value_of(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => self.first_name.as_deref(),
            Field::LastName => self.last_name.as_deref(),
            Field::PhoneNumber => self.phone_number.as_deref(),
            Field::Stylist | Field::Service => None,
        }
    }
}

/// A stored customer: the validated input plus its assigned identity.
///
/// Records are never mutated after creation; edits are modeled as new
/// inserts in the current design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One bookable instant and the stylists eligible to work it.
///
/// The stylist list is supplied by an external scheduling source; duplicates
/// are permitted and reads are membership-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimeSlot {
    pub starts_at: i64,
    pub stylists: Vec<String>,
}

/// A booked appointment, referencing its customer by identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub customer: CustomerId,
    pub starts_at: i64,
    pub stylist: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

/// An appointment joined with its full customer record, for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    pub starts_at: i64,
    pub stylist: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub customer: CustomerRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_value_of_maps_own_fields() {
        let customer = Customer::new("Ashley", "Doe", "555 1234");
        assert_eq!(customer.value_of(Field::FirstName), Some("Ashley"));
        assert_eq!(customer.value_of(Field::LastName), Some("Doe"));
        assert_eq!(customer.value_of(Field::PhoneNumber), Some("555 1234"));
        assert_eq!(customer.value_of(Field::Stylist), None);
        assert_eq!(customer.value_of(Field::Service), None);
    }

    #[test]
    fn customer_record_serializes_camel_case() {
        let record = CustomerRecord {
            id: CustomerId(3),
            first_name: "Ashley".to_string(),
            last_name: "Doe".to_string(),
            phone_number: "555 1234".to_string(),
            notes: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["firstName"], "Ashley");
        assert_eq!(json["phoneNumber"], "555 1234");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn customer_deserializes_partial_input() {
        let customer: Customer =
            serde_json::from_str(r#"{"firstName": "Jo"}"#).unwrap();
        assert_eq!(customer.first_name.as_deref(), Some("Jo"));
        assert_eq!(customer.last_name, None);
        assert_eq!(customer.phone_number, None);
    }
}
