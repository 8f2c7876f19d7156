//! End-to-end booking scenarios driving the public API the way the
//! transport layer does.

use chrono::{Datelike, Local, LocalResult, NaiveDate, TimeZone, Timelike, Weekday};
use rand::rngs::StdRng;
use rand::SeedableRng;

use salonapp::availability::{applicable_time_slots, is_slot_selectable};
use salonapp::directory::{OrderBy, OrderDirection};
use salonapp::sample::{sample_available_time_slots, sample_customers};
use salonapp::slots::{daily_time_slots, merge_date_and_time, weekly_date_values};
use salonapp::validation::Field;
use salonapp::{
    Appointment, AvailableTimeSlot, Customer, CustomerId, SalonApi, SalonConfig, SearchQuery,
};

fn local_ms(date: NaiveDate, hour: u32, minute: u32) -> i64 {
    match date
        .and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_local_timezone(Local)
    {
        LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t.timestamp_millis(),
        LocalResult::None => panic!("wall-clock value does not exist locally"),
    }
}

#[test]
fn the_week_grid_for_december_2018() {
    // Salon open 9-19: twenty slots a day, anchored on Saturday 2018-12-01.
    let anchor = NaiveDate::from_ymd_opt(2018, 12, 1).unwrap();
    let times = daily_time_slots(9, 19).unwrap();
    assert_eq!(times.len(), 20);

    let as_local = |ms: i64| Local.timestamp_millis_opt(ms).unwrap();
    assert_eq!((as_local(times[0]).hour(), as_local(times[0]).minute()), (9, 0));
    assert_eq!((as_local(times[1]).hour(), as_local(times[1]).minute()), (9, 30));
    assert_eq!((as_local(times[2]).hour(), as_local(times[2]).minute()), (10, 0));

    let dates = weekly_date_values(local_ms(anchor, 11, 0)).unwrap();
    assert_eq!(dates.len(), 7);
    assert_eq!(as_local(dates[0]).weekday(), Weekday::Sat);
    assert_eq!(as_local(dates[0]).day(), 1);
    assert_eq!(as_local(dates[1]).weekday(), Weekday::Sun);
    assert_eq!(as_local(dates[1]).day(), 2);
}

#[test]
fn booking_a_customer_end_to_end() {
    let anchor = NaiveDate::from_ymd_opt(2018, 12, 1).unwrap();
    let slot_instant = local_ms(anchor, 9, 30);
    let mut api = SalonApi::with_seed(
        Vec::new(),
        Vec::new(),
        vec![AvailableTimeSlot {
            starts_at: slot_instant,
            stylists: vec!["Sam".to_string(), "Pat".to_string()],
        }],
    );

    // The receptionist records the customer.
    let record = api
        .add_customer(Customer::new("Jordan", "Walker", "+1 555 0199"))
        .unwrap();
    assert_eq!(record.id, CustomerId(0));

    // The grid cell for Sat 09:30 is selectable for Sam but not for Jo.
    let dates = weekly_date_values(local_ms(anchor, 14, 0)).unwrap();
    let times = daily_time_slots(9, 19).unwrap();
    let cell = merge_date_and_time(dates[0], times[1]).unwrap();
    assert_eq!(cell, slot_instant);

    let slots = api.available_time_slots().to_vec();
    assert!(is_slot_selectable(&applicable_time_slots(&slots, None), cell));
    assert!(is_slot_selectable(
        &applicable_time_slots(&slots, Some("Sam")),
        cell
    ));
    assert!(!is_slot_selectable(
        &applicable_time_slots(&slots, Some("Jo")),
        cell
    ));

    // Booking and reading the day back.
    api.add_appointment(Appointment {
        customer: record.id,
        starts_at: cell,
        stylist: "Sam".to_string(),
        service: "Cut".to_string(),
        notes: None,
    })
    .unwrap();

    let day = api.appointments_between(local_ms(anchor, 0, 0), local_ms(anchor, 23, 30));
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].customer.first_name, "Jordan");
    assert_eq!(day[0].stylist, "Sam");

    let (joined, booked) = api.customer_with_appointments(record.id).unwrap();
    assert_eq!(joined.phone_number, "+1 555 0199");
    assert_eq!(booked.len(), 1);
}

#[test]
fn rejected_submissions_report_every_failing_field() {
    let mut api = SalonApi::new();
    let error = api
        .add_customer(Customer {
            last_name: Some("Doe".to_string()),
            ..Customer::default()
        })
        .unwrap_err();
    let errors = error.validation_errors().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
    assert_eq!(
        errors.get(Field::PhoneNumber),
        Some("Phone number is required")
    );

    // The wire shape the transport layer serializes.
    let json = serde_json::to_value(errors).unwrap();
    assert_eq!(json["firstName"], "First name is required");
}

#[test]
fn paging_through_the_directory_with_cursors() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut api = SalonApi::with_seed(sample_customers(&mut rng, 23), Vec::new(), Vec::new());

    let query = SearchQuery {
        order_by: OrderBy::PhoneNumber,
        order_direction: OrderDirection::Asc,
        ..SearchQuery::default()
    };

    let mut seen = Vec::new();
    let mut after = None;
    loop {
        let page = api.search_customers(&SearchQuery {
            after,
            ..query.clone()
        });
        if page.is_empty() {
            break;
        }
        after = page.last().map(|record| record.id);
        for record in page {
            assert!(!seen.contains(&record.id), "pages must not overlap");
            seen.push(record.id);
        }
    }
    assert_eq!(seen.len(), 23);

    // Directory growth between pages shifts membership; cursors are
    // best-effort, not snapshots.
    let first_page = api.search_customers(&query);
    api.add_customer(Customer::new("Aaa", "Aardvark", "+1 000 0000"))
        .unwrap();
    let refreshed = api.search_customers(&query);
    assert_eq!(refreshed.len(), first_page.len());
}

#[test]
fn a_generated_week_of_slots_narrows_by_stylist() {
    let config = SalonConfig::default();
    let mut rng = StdRng::seed_from_u64(9);
    let anchor = chrono::Local::now().timestamp_millis();
    let slots = sample_available_time_slots(&mut rng, &config, anchor, 50).unwrap();

    let narrowed = applicable_time_slots(&slots, Some("Sam"));
    assert_eq!(narrowed.len(), slots.len());
    for (slot, kept) in slots.iter().zip(&narrowed) {
        if slot.stylists.iter().any(|s| s == "Sam") {
            assert_eq!(kept, slot);
        } else {
            assert!(kept.stylists.is_empty());
        }
    }
}
