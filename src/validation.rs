//! # Field Validation
//!
//! Pure, composable field validators used by both directories.
//!
//! ## Design
//!
//! Validation is built from three pieces:
//!
//! - [`Field`]: a closed enumeration of every validatable field name. No
//!   dynamic key iteration; the set of fields is fixed at compile time.
//! - Validators: factories ([`required`], [`matching`]) that produce a
//!   boxed `&str -> Option<String>` check. `None` means the value passed.
//! - [`first_of`]: the ordered combinator. Runs validators in sequence and
//!   reports the first failure for a field, so "required" masks "format"
//!   for an empty value.
//!
//! Fields are validated independently of each other: a customer missing
//! every field gets every message back at once, collected in
//! [`ValidationErrors`].
//!
//! Validation failures are data, not fatal conditions. The error map
//! serializes as `{ "fieldName": "message" }` for the transport layer.

use std::collections::BTreeMap;

use serde::Serialize;

/// The closed set of validatable field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    PhoneNumber,
    Stylist,
    Service,
}

impl Field {
    /// Wire name of the field, as used in error maps and query arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::PhoneNumber => "phoneNumber",
            Field::Stylist => "stylist",
            Field::Service => "service",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field→message map describing every failed field of one submission.
///
/// Fields that passed are absent. Ordered by field for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// A single-field check. `None` means the value is acceptable.
pub type Validator = Box<dyn Fn(&str) -> Option<String>>;

/// Fails with "`description` is required" when the value is empty after
/// trimming.
pub fn required(description: &str) -> Validator {
    let message = format!("{description} is required");
    Box::new(move |value| {
        if value.trim().is_empty() {
            Some(message.clone())
        } else {
            None
        }
    })
}

/// Fails with `message` when any character of the value falls outside the
/// allowed class.
pub fn matching(message: &str, allowed: fn(char) -> bool) -> Validator {
    let message = message.to_string();
    Box::new(move |value| {
        if value.chars().all(allowed) {
            None
        } else {
            Some(message.clone())
        }
    })
}

/// Runs validators in order; the first failure wins.
pub fn first_of(validators: Vec<Validator>) -> Validator {
    Box::new(move |value| validators.iter().find_map(|validator| validator(value)))
}

/// Characters permitted in a phone number: digits, spaces, `+`, `-` and
/// parentheses.
pub fn is_valid_phone_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, ' ' | '+' | '-' | '(' | ')')
}

/// Message reported when a phone number contains disallowed characters.
pub const PHONE_FORMAT_MESSAGE: &str =
    "Only numbers, spaces and these symbols are allowed: ( ) + -";
