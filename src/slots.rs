//! # Slot Grid
//!
//! Pure functions producing the weekly grid of bookable instants: the
//! half-hour time-of-day sequence (grid rows), the seven-day date sequence
//! (grid columns), and the merge that turns a (column, row) coordinate into
//! an absolute bookable instant.
//!
//! ## Wall-clock arithmetic
//!
//! All values are epoch milliseconds in the process-local time zone, matching
//! the wire contract. Sequences are generated by fixed-step increment from a
//! local start instant; no time-zone handling beyond local wall clock is
//! attempted.
//!
//! Malformed parameters (closing hour not after opening hour, hours outside
//! the day) are rejected with [`SalonError::InvalidRange`] before any date
//! arithmetic happens.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDateTime, TimeZone};

use crate::error::{Result, SalonError};

/// Milliseconds in one slot step.
pub const HALF_HOUR_MS: i64 = 30 * 60 * 1000;

/// Milliseconds in one grid column step.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Evenly spaced instants: `count` values starting at `start_ms`, stepping
/// by `increment_ms`.
fn time_increments(count: i64, start_ms: i64, increment_ms: i64) -> Vec<i64> {
    (0..count).map(|i| start_ms + i * increment_ms).collect()
}

/// The half-hour time-of-day sequence for one salon day.
///
/// Produces `(closes_at - opens_at) * 2` instants, 30 minutes apart,
/// starting at `opens_at:00` on the current local day. Rejects hours where
/// the salon would close at or before it opens, or that fall outside a
/// 24-hour day.
pub fn daily_time_slots(opens_at: u32, closes_at: u32) -> Result<Vec<i64>> {
    if closes_at <= opens_at || opens_at > 23 || closes_at > 24 {
        return Err(SalonError::InvalidRange { opens_at, closes_at });
    }
    let total_slots = i64::from((closes_at - opens_at) * 2);
    let start = Local::now()
        .date_naive()
        .and_hms_opt(opens_at, 0, 0)
        .ok_or(SalonError::InvalidRange { opens_at, closes_at })?;
    Ok(time_increments(total_slots, local_ms(start), HALF_HOUR_MS))
}

/// The seven-day date sequence for one grid week.
///
/// Returns 7 instants starting at local midnight of the anchor's own
/// calendar day, one per day offset 0..6.
pub fn weekly_date_values(anchor_ms: i64) -> Result<Vec<i64>> {
    let midnight = local_datetime(anchor_ms)?
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .ok_or(SalonError::InvalidInstant(anchor_ms))?;
    Ok(time_increments(7, local_ms(midnight), DAY_MS))
}

/// Combines the calendar-date portion of `date_ms` with the time-of-day
/// portion of `time_ms`, in local time.
///
/// This is the canonical way a grid coordinate (column date, row time)
/// becomes a bookable instant. Idempotent under re-merging with the same
/// time value.
pub fn merge_date_and_time(date_ms: i64, time_ms: i64) -> Result<i64> {
    let date = local_datetime(date_ms)?.date_naive();
    let time = local_datetime(time_ms)?.time();
    Ok(local_ms(date.and_time(time)))
}

fn local_datetime(ms: i64) -> Result<DateTime<Local>> {
    match Local.timestamp_millis_opt(ms) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt),
        LocalResult::None => Err(SalonError::InvalidInstant(ms)),
    }
}

fn local_ms(dt: NaiveDateTime) -> i64 {
    match dt.and_local_timezone(Local) {
        LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t.timestamp_millis(),
        // The wall-clock value falls inside a DST gap; take the next valid
        // hour, like the platform date libraries the transport layer uses.
        LocalResult::None => (dt + Duration::hours(1))
            .and_local_timezone(Local)
            .earliest()
            .map_or(0, |t| t.timestamp_millis()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike, Weekday};

    fn ms_of(date: NaiveDate, hour: u32, minute: u32) -> i64 {
        local_ms(date.and_hms_opt(hour, minute, 0).unwrap())
    }

    #[test]
    fn daily_time_slots_counts_two_per_hour() {
        let slots = daily_time_slots(9, 19).unwrap();
        assert_eq!(slots.len(), 20);
    }

    #[test]
    fn daily_time_slots_step_thirty_minutes_apart() {
        let slots = daily_time_slots(9, 19).unwrap();
        for pair in slots.windows(2) {
            assert_eq!(pair[1] - pair[0], HALF_HOUR_MS);
        }
    }

    #[test]
    fn daily_time_slots_start_at_opening_time() {
        let slots = daily_time_slots(9, 19).unwrap();
        let first = local_datetime(slots[0]).unwrap();
        assert_eq!((first.hour(), first.minute()), (9, 0));
        let second = local_datetime(slots[1]).unwrap();
        assert_eq!((second.hour(), second.minute()), (9, 30));
        let third = local_datetime(slots[2]).unwrap();
        assert_eq!((third.hour(), third.minute()), (10, 0));
    }

    #[test]
    fn daily_time_slots_reject_closed_before_open() {
        assert!(matches!(
            daily_time_slots(19, 9),
            Err(SalonError::InvalidRange { opens_at: 19, closes_at: 9 })
        ));
        assert!(daily_time_slots(9, 9).is_err());
        assert!(daily_time_slots(9, 25).is_err());
    }

    #[test]
    fn weekly_date_values_return_seven_consecutive_days() {
        let anchor = NaiveDate::from_ymd_opt(2018, 12, 1).unwrap();
        let dates = weekly_date_values(ms_of(anchor, 14, 30)).unwrap();
        assert_eq!(dates.len(), 7);
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], DAY_MS);
        }
    }

    #[test]
    fn weekly_date_values_start_at_anchor_midnight() {
        let anchor = NaiveDate::from_ymd_opt(2018, 12, 1).unwrap();
        let dates = weekly_date_values(ms_of(anchor, 14, 30)).unwrap();
        let first = local_datetime(dates[0]).unwrap();
        assert_eq!(first.date_naive(), anchor);
        assert_eq!((first.hour(), first.minute()), (0, 0));
        // 2018-12-01 is a Saturday, so the grid runs Sat 01, Sun 02, ...
        assert_eq!(first.weekday(), Weekday::Sat);
        let second = local_datetime(dates[1]).unwrap();
        assert_eq!(second.weekday(), Weekday::Sun);
        assert_eq!(second.day(), 2);
    }

    #[test]
    fn merge_combines_date_and_time_of_day() {
        let date = ms_of(NaiveDate::from_ymd_opt(2018, 12, 3).unwrap(), 0, 0);
        let time = ms_of(NaiveDate::from_ymd_opt(2018, 12, 1).unwrap(), 9, 30);
        let merged = merge_date_and_time(date, time).unwrap();
        let instant = local_datetime(merged).unwrap();
        assert_eq!(instant.date_naive(), NaiveDate::from_ymd_opt(2018, 12, 3).unwrap());
        assert_eq!((instant.hour(), instant.minute()), (9, 30));
    }

    #[test]
    fn merge_is_idempotent_under_remerging() {
        let date = ms_of(NaiveDate::from_ymd_opt(2018, 12, 3).unwrap(), 0, 0);
        let time = ms_of(NaiveDate::from_ymd_opt(2018, 12, 1).unwrap(), 16, 0);
        let merged = merge_date_and_time(date, time).unwrap();
        assert_eq!(merge_date_and_time(merged, time).unwrap(), merged);
    }

    #[test]
    fn grid_coordinates_resolve_to_slot_instants() {
        // A cell instant built from a weekly column and a daily row matches
        // the directly constructed wall-clock value.
        let anchor = NaiveDate::from_ymd_opt(2018, 12, 1).unwrap();
        let dates = weekly_date_values(ms_of(anchor, 10, 0)).unwrap();
        let times = daily_time_slots(9, 19).unwrap();
        let cell = merge_date_and_time(dates[2], times[1]).unwrap();
        let expected = ms_of(NaiveDate::from_ymd_opt(2018, 12, 3).unwrap(), 9, 30);
        assert_eq!(cell, expected);
    }
}
