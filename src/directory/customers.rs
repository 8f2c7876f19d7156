//! # Customer Directory
//!
//! The authoritative customer store: validated inserts with monotonic
//! identity assignment, and the multi-term prefix search engine with
//! ordered, cursor-paginated results.
//!
//! ## Search pipeline
//!
//! 1. Empty term list becomes one empty term, which prefix-matches everyone.
//! 2. Each term selects records where it is a case-insensitive prefix of the
//!    first name, last name, or phone number.
//! 3. Per-term hits are unioned, de-duplicated by identity, keeping the
//!    order of first appearance.
//! 4. The union is sorted by the requested field (lexicographic string
//!    comparison; descending reverses it).
//! 5. A cursor drops everything up to and including the record with that
//!    identity. A cursor identity no longer present resets to the start —
//!    best-effort pagination, not a consistency guarantee.
//! 6. At most `limit` records are returned (default 10).
//!
//! Cursors are stable and resumable as long as the directory does not mutate
//! between pages; no snapshot isolation is provided.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::model::{Customer, CustomerId, CustomerRecord};
use crate::validation::{
    first_of, is_valid_phone_char, matching, required, Field, ValidationErrors, Validator,
    PHONE_FORMAT_MESSAGE,
};

/// Page size applied when a query does not name one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Field a search result page is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderBy {
    #[default]
    FirstName,
    LastName,
    PhoneNumber,
}

/// Direction of the result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

/// One search request: terms, ordering, and pagination position.
///
/// `after` carries the identity of the last record seen on the previous
/// page; the next page starts at the following record. If that identity is
/// no longer found, the search silently resumes from the first page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    pub search_terms: Vec<String>,
    pub limit: Option<usize>,
    pub order_by: OrderBy,
    pub order_direction: OrderDirection,
    pub after: Option<CustomerId>,
}

impl SearchQuery {
    /// A query matching everything, ordered by first name ascending.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_terms: terms.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// The authoritative customer store. See the module docs for search
/// semantics.
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    // Kept in insertion order; ids are assigned monotonically, so the vec
    // is always sorted by id as well.
    records: Vec<CustomerRecord>,
    next_id: u64,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory pre-seeded with `customers`. Seed rows that fail
    /// validation (including phone duplicates within the seed itself) are
    /// skipped so the uniqueness index stays sound.
    pub fn with_customers<I>(customers: I) -> Self
    where
        I: IntoIterator<Item = Customer>,
    {
        let mut directory = Self::new();
        for customer in customers {
            if let Err(errors) = directory.insert(customer) {
                debug!(%errors, "skipping invalid seed customer");
            }
        }
        directory
    }

    /// Validates and stores a customer, assigning the next identity.
    ///
    /// All failing fields are reported together; identities are consumed
    /// only on success.
    pub fn insert(
        &mut self,
        customer: Customer,
    ) -> std::result::Result<CustomerRecord, ValidationErrors> {
        let errors = self.validate(&customer);
        if !errors.is_empty() {
            return Err(errors);
        }
        let record = CustomerRecord {
            id: CustomerId(self.next_id),
            first_name: customer.first_name.unwrap_or_default(),
            last_name: customer.last_name.unwrap_or_default(),
            phone_number: customer.phone_number.unwrap_or_default(),
            notes: customer.notes,
        };
        self.next_id += 1;
        debug!(id = %record.id, "customer inserted");
        self.records.push(record.clone());
        Ok(record)
    }

    /// Looks a record up by identity.
    pub fn get(&self, id: CustomerId) -> Option<&CustomerRecord> {
        self.records
            .binary_search_by_key(&id, |record| record.id)
            .ok()
            .and_then(|position| self.records.get(position))
    }

    /// Every record, in insertion order.
    pub fn all(&self) -> &[CustomerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Runs a search query. See the module docs for the pipeline.
    pub fn search(&self, query: &SearchQuery) -> Vec<CustomerRecord> {
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        let terms: Vec<String> = if query.search_terms.is_empty() {
            vec![String::new()]
        } else {
            query.search_terms.clone()
        };

        // Union of per-term hits, de-duplicated by identity in order of
        // first appearance.
        let mut seen: HashSet<CustomerId> = HashSet::new();
        let mut matches: Vec<&CustomerRecord> = Vec::new();
        for term in &terms {
            let term_lower = term.to_lowercase();
            for record in self.records.iter().filter(|r| matches_term(r, &term_lower)) {
                if seen.insert(record.id) {
                    matches.push(record);
                }
            }
        }

        // Stable sort, so equal keys keep first-appearance order.
        matches.sort_by(|l, r| {
            let ordering = sort_key(l, query.order_by).cmp(sort_key(r, query.order_by));
            match query.order_direction {
                OrderDirection::Asc => ordering,
                OrderDirection::Desc => ordering.reverse(),
            }
        });

        let start = query.after.map_or(0, |after| {
            matches
                .iter()
                .position(|record| record.id == after)
                // A vanished cursor resets to the first page.
                .map_or(0, |position| position + 1)
        });

        matches
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect()
    }

    fn validate(&self, customer: &Customer) -> ValidationErrors {
        let validators: [(Field, Validator); 3] = [
            (Field::FirstName, required("First name")),
            (Field::LastName, required("Last name")),
            (
                Field::PhoneNumber,
                first_of(vec![
                    required("Phone number"),
                    matching(PHONE_FORMAT_MESSAGE, is_valid_phone_char),
                ]),
            ),
        ];

        let mut errors = ValidationErrors::new();
        for (field, validator) in &validators {
            let value = customer.value_of(*field).unwrap_or("");
            if let Some(message) = validator(value) {
                errors.insert(*field, message);
            }
        }

        // Uniqueness runs only when the phone passed its field checks, so a
        // format failure is not masked by the duplicate message.
        if !errors.contains(Field::PhoneNumber) {
            if let Some(phone) = customer.phone_number.as_deref() {
                if self.records.iter().any(|r| r.phone_number == phone) {
                    errors.insert(
                        Field::PhoneNumber,
                        "Phone number already exists in the system".to_string(),
                    );
                }
            }
        }
        errors
    }
}

fn matches_term(record: &CustomerRecord, term_lower: &str) -> bool {
    [
        &record.first_name,
        &record.last_name,
        &record.phone_number,
    ]
    .iter()
    .any(|value| value.to_lowercase().starts_with(term_lower))
}

fn sort_key(record: &CustomerRecord, order_by: OrderBy) -> &str {
    match order_by {
        OrderBy::FirstName => &record.first_name,
        OrderBy::LastName => &record.last_name,
        OrderBy::PhoneNumber => &record.phone_number,
    }
}
