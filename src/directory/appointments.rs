//! # Appointment Directory
//!
//! Appointment storage and retrieval, plus the pass-through seam for the
//! externally supplied available-time-slot source.
//!
//! Inserts validate required fields only (service and stylist). Nothing
//! checks whether the same stylist is already booked at the same instant;
//! double-booking protection is a pending product decision, not an
//! oversight of this module.

use tracing::debug;

use crate::model::{Appointment, AppointmentView, AvailableTimeSlot, CustomerId};
use crate::validation::{required, Field, ValidationErrors};

use super::customers::CustomerDirectory;

/// Appointment store. Depends on [`CustomerDirectory`] identities for the
/// presentation join; it never owns customer data itself.
#[derive(Debug, Default)]
pub struct AppointmentDirectory {
    appointments: Vec<Appointment>,
    time_slots: Vec<AvailableTimeSlot>,
}

impl AppointmentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory pre-seeded with appointments and the slot source.
    /// Seed rows that fail validation are skipped.
    pub fn with_seed<I>(appointments: I, time_slots: Vec<AvailableTimeSlot>) -> Self
    where
        I: IntoIterator<Item = Appointment>,
    {
        let mut directory = Self {
            appointments: Vec::new(),
            time_slots,
        };
        for appointment in appointments {
            if let Err(errors) = directory.insert(appointment) {
                debug!(%errors, "skipping invalid seed appointment");
            }
        }
        directory
    }

    /// Validates and stores an appointment.
    ///
    /// Service and stylist are required; all failing fields are reported
    /// together. The (stylist, starts_at) pair is not checked for overlap.
    pub fn insert(
        &mut self,
        appointment: Appointment,
    ) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(message) = required("Stylist")(&appointment.stylist) {
            errors.insert(Field::Stylist, message);
        }
        if let Some(message) = required("Service")(&appointment.service) {
            errors.insert(Field::Service, message);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        debug!(
            customer = %appointment.customer,
            starts_at = appointment.starts_at,
            "appointment inserted"
        );
        self.appointments.push(appointment);
        Ok(())
    }

    /// Appointments with `from <= starts_at <= to`, ordered by start time
    /// and joined with their full customer records.
    ///
    /// Appointments referencing an identity the customer directory does not
    /// know are omitted from the joined view.
    pub fn range_query(
        &self,
        from: i64,
        to: i64,
        customers: &CustomerDirectory,
    ) -> Vec<AppointmentView> {
        let mut views: Vec<AppointmentView> = self
            .appointments
            .iter()
            .filter(|a| from <= a.starts_at && a.starts_at <= to)
            .filter_map(|a| {
                customers.get(a.customer).map(|customer| AppointmentView {
                    starts_at: a.starts_at,
                    stylist: a.stylist.clone(),
                    service: a.service.clone(),
                    notes: a.notes.clone(),
                    customer: customer.clone(),
                })
            })
            .collect();
        views.sort_by_key(|view| view.starts_at);
        views
    }

    /// Every appointment booked for `customer`, in insertion order.
    pub fn for_customer(&self, customer: CustomerId) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.customer == customer)
            .collect()
    }

    /// The externally supplied slot source, unchanged. This is the seam
    /// between the slot grid and whatever process decides per-instant
    /// stylist eligibility.
    pub fn available_time_slots(&self) -> &[AvailableTimeSlot] {
        &self.time_slots
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
