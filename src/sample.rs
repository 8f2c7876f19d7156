//! # Sample Data
//!
//! Seedable generators for demo seeding and tests: fake customers, a day of
//! appointments, and a week's worth of available time slots with randomly
//! drawn stylist eligibility.
//!
//! Everything takes an explicit `rand` generator, so demos can use entropy
//! while tests pass a fixed-seed [`rand::rngs::StdRng`] and stay
//! reproducible. The selection helpers are plain free functions.

use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;

use crate::config::SalonConfig;
use crate::error::Result;
use crate::model::{Appointment, AvailableTimeSlot, Customer, CustomerId};
use crate::slots::{daily_time_slots, merge_date_and_time, weekly_date_values};

const FIRST_NAMES: &[&str] = &[
    "Ashley", "Jordan", "Casey", "Morgan", "Riley", "Taylor", "Avery", "Quinn", "Rowan", "Sage",
];

const LAST_NAMES: &[&str] = &[
    "Jones", "Smith", "Brown", "Davies", "Wilson", "Evans", "Thomas", "Walker", "Wright", "Hall",
];

/// A uniformly drawn element, or `None` for an empty slice.
pub fn pick_random<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.gen_range(0..items.len()))
    }
}

/// `count` independent draws (with repetition) from `items`.
pub fn pick_many<T: Clone, R: Rng>(rng: &mut R, items: &[T], count: usize) -> Vec<T> {
    (0..count)
        .filter_map(|_| pick_random(rng, items).cloned())
        .collect()
}

/// De-duplicates by `key`, keeping the first occurrence and its order.
pub fn unique_by<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// `count` fake customers with distinct phone numbers, ready to seed a
/// directory.
pub fn sample_customers<R: Rng>(rng: &mut R, count: usize) -> Vec<Customer> {
    (0..count)
        .map(|i| {
            let first = pick_random(rng, FIRST_NAMES).copied().unwrap_or("Ashley");
            let last = pick_random(rng, LAST_NAMES).copied().unwrap_or("Jones");
            // Sequential suffix keeps phone numbers unique across the batch.
            Customer::new(first, last, &format!("+1 555 {i:04}"))
        })
        .collect()
}

/// One appointment per open hour of `date_ms`, spread over the given
/// customers.
pub fn sample_appointments<R: Rng>(
    rng: &mut R,
    config: &SalonConfig,
    customers: &[CustomerId],
    date_ms: i64,
) -> Result<Vec<Appointment>> {
    let services = config.services();
    let times = daily_time_slots(config.opens_at, config.closes_at)?;
    let mut appointments = Vec::new();
    // Hourly, so every other half-hour slot.
    for time in times.iter().step_by(2) {
        let Some(customer) = pick_random(rng, customers).copied() else {
            break;
        };
        let service = pick_random(rng, &services)
            .cloned()
            .unwrap_or_else(|| "Cut".to_string());
        let stylist = pick_random(rng, &config.stylists_for(&service))
            .cloned()
            .unwrap_or_else(|| "Ashley".to_string());
        appointments.push(Appointment {
            customer,
            starts_at: merge_date_and_time(date_ms, *time)?,
            stylist,
            service,
            notes: None,
        });
    }
    Ok(appointments)
}

/// A random selection of bookable slots for the week anchored at
/// `anchor_ms`, each with a randomly drawn eligible-stylist set.
///
/// The full grid is generated first, then `count` slots are sampled from
/// it; duplicates are dropped, so fewer than `count` slots may come back.
pub fn sample_available_time_slots<R: Rng>(
    rng: &mut R,
    config: &SalonConfig,
    anchor_ms: i64,
    count: usize,
) -> Result<Vec<AvailableTimeSlot>> {
    let stylists = config.stylists();
    let times = daily_time_slots(config.opens_at, config.closes_at)?;
    let dates = weekly_date_values(anchor_ms)?;

    let mut grid = Vec::with_capacity(times.len() * dates.len());
    for date in &dates {
        for time in &times {
            let eligible_count = rng.gen_range(0..=stylists.len());
            grid.push(AvailableTimeSlot {
                starts_at: merge_date_and_time(*date, *time)?,
                stylists: pick_many(rng, &stylists, eligible_count),
            });
        }
    }

    let sampled = pick_many(rng, &grid, count);
    Ok(unique_by(sampled, |slot| slot.starts_at))
}
