use chrono::{DateTime, Utc};
use chrono_tz::Europe::Madrid;
use chrono_tz::Tz;

use crate::models::Race;

/// UTC start instant of a race, built from its calendar date and optional
/// start time. Races published without a time default to midnight UTC.
/// Entries with unparseable dates are dropped by the selector.
pub fn race_start(race: &Race) -> Option<DateTime<Utc>> {
    let time = race.time.as_deref().unwrap_or("00:00:00Z");
    DateTime::parse_from_rfc3339(&format!("{}T{}", race.date, time))
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Race with the minimum start instant strictly after `now`, or `None`
/// when the season has run out.
pub fn next_race<'a>(races: &'a [Race], now: DateTime<Utc>) -> Option<(&'a Race, DateTime<Utc>)> {
    races
        .iter()
        .filter_map(|race| race_start(race).map(|start| (race, start)))
        .filter(|(_, start)| *start > now)
        .min_by_key(|(_, start)| *start)
}

/// Converts a UTC instant to Madrid civil time, with the standard or
/// daylight offset that applies on that specific date.
pub fn madrid_local(instant: DateTime<Utc>) -> DateTime<Tz> {
    instant.with_timezone(&Madrid)
}

pub fn display_time(instant: DateTime<Utc>) -> String {
    madrid_local(instant).format("%d/%m/%Y %H:%M").to_string()
}
