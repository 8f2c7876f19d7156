//! # Availability Matcher
//!
//! Narrows the raw slot list supplied by the scheduling source down to what
//! a booking-in-progress may actually book, given the service and stylist
//! selected so far.
//!
//! ## Positional correspondence
//!
//! Callers iterate the slot list alongside grid cells by index, so filtering
//! must never change the list's length or order. Slots the selected stylist
//! cannot work are replaced in place by [`unavailable_slot`]: an empty
//! eligibility set at an out-of-range instant that no grid cell will ever
//! match.

use crate::config::SalonConfig;
use crate::model::AvailableTimeSlot;

/// Sentinel instant carried by filtered-out slots. Grid cells are always
/// merged from midnight-aligned dates and positive times of day, so no cell
/// can resolve to it.
pub const UNAVAILABLE: i64 = -1;

/// The slot standing in for one a selected stylist cannot work.
pub fn unavailable_slot() -> AvailableTimeSlot {
    AvailableTimeSlot {
        starts_at: UNAVAILABLE,
        stylists: Vec::new(),
    }
}

/// Slots bookable by `selected_stylist`.
///
/// With no stylist selected the list is returned unchanged; otherwise every
/// slot the stylist is not eligible for becomes [`unavailable_slot`],
/// preserving positional correspondence with the grid.
pub fn applicable_time_slots(
    slots: &[AvailableTimeSlot],
    selected_stylist: Option<&str>,
) -> Vec<AvailableTimeSlot> {
    match selected_stylist {
        None => slots.to_vec(),
        Some(stylist) => slots
            .iter()
            .map(|slot| {
                if slot.stylists.iter().any(|s| s == stylist) {
                    slot.clone()
                } else {
                    unavailable_slot()
                }
            })
            .collect(),
    }
}

/// Whether the grid cell at `instant` may be booked, given an already
/// narrowed slot list.
pub fn is_slot_selectable(slots: &[AvailableTimeSlot], instant: i64) -> bool {
    slots.iter().any(|slot| slot.starts_at == instant)
}

/// Stylists offerable for the selected service. With no service selected the
/// whole roster is offered.
pub fn stylists_for_service(config: &SalonConfig, service: Option<&str>) -> Vec<String> {
    match service {
        None => config.stylists(),
        Some(service) => config.stylists_for(service),
    }
}
