//! # API Facade
//!
//! [`SalonApi`] is the single entry point the transport layer talks to. It
//! is a thin facade over the two directories: each method maps one-to-one
//! onto a wire endpoint, normalizes defaults, and returns structured types.
//!
//! ## What the facade does NOT do
//!
//! - **Business logic**: that lives in the directories and the pure modules.
//! - **I/O**: no stdout, no network, no status codes. The transport layer
//!   maps `Ok`/`Err(Validation)` onto created/unprocessable responses.
//! - **Rendering**: grid construction stays in [`crate::slots`] and
//!   [`crate::availability`]; the facade only hands over the slot source.

use tracing::debug;

use crate::directory::{AppointmentDirectory, CustomerDirectory, SearchQuery};
use crate::error::Result;
use crate::model::{
    Appointment, AppointmentView, AvailableTimeSlot, Customer, CustomerId, CustomerRecord,
};

/// The booking core behind the (out-of-scope) HTTP/GraphQL layer.
///
/// Owns both directories; constructed once per process with seed data and
/// the externally supplied slot source.
#[derive(Debug, Default)]
pub struct SalonApi {
    customers: CustomerDirectory,
    appointments: AppointmentDirectory,
}

impl SalonApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the core from seed customers, seed appointments, and the
    /// available-slot source. Invalid seed rows are skipped.
    pub fn with_seed(
        customers: Vec<Customer>,
        appointments: Vec<Appointment>,
        time_slots: Vec<AvailableTimeSlot>,
    ) -> Self {
        Self {
            customers: CustomerDirectory::with_customers(customers),
            appointments: AppointmentDirectory::with_seed(appointments, time_slots),
        }
    }

    /// `GET /customers` — runs a search query.
    pub fn search_customers(&self, query: &SearchQuery) -> Vec<CustomerRecord> {
        let results = self.customers.search(query);
        debug!(terms = ?query.search_terms, hits = results.len(), "customer search");
        results
    }

    /// `POST /customers` — validates and stores a customer.
    ///
    /// On failure the error carries the field→message map for the caller to
    /// render with an unprocessable status.
    pub fn add_customer(&mut self, customer: Customer) -> Result<CustomerRecord> {
        Ok(self.customers.insert(customer)?)
    }

    /// `GET /availableTimeSlots` — the slot source, unchanged.
    pub fn available_time_slots(&self) -> &[AvailableTimeSlot] {
        self.appointments.available_time_slots()
    }

    /// `GET /appointments/{from}-{to}` — appointments in the inclusive
    /// start-time range, joined with customer records.
    pub fn appointments_between(&self, from: i64, to: i64) -> Vec<AppointmentView> {
        self.appointments.range_query(from, to, &self.customers)
    }

    /// `POST /appointments` — validates and stores an appointment.
    pub fn add_appointment(&mut self, appointment: Appointment) -> Result<()> {
        Ok(self.appointments.insert(appointment)?)
    }

    /// GraphQL `customer` root field — one customer with every appointment
    /// booked for them.
    pub fn customer_with_appointments(
        &self,
        id: CustomerId,
    ) -> Option<(CustomerRecord, Vec<Appointment>)> {
        let record = self.customers.get(id)?.clone();
        let booked = self
            .appointments
            .for_customer(id)
            .into_iter()
            .cloned()
            .collect();
        Some((record, booked))
    }
}
