//! Birthday window queries.
//!
//! Two questions are answered here:
//!
//! - **Who has a birthday within the next 7 days?** ([`upcoming_within_week`])
//!   Each birthday is placed in the current year, or the next one if that date
//!   already passed, and grouped by weekday. Weekend birthdays are reported
//!   under Monday, the day they get celebrated at work.
//!
//! - **Who has a birthday exactly N days from today?** ([`upcoming_on_offset`])
//!   Each birthday is placed in the target date's year and compared for
//!   equality. There is no rollover: the target year is the only year checked.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use crate::model::{AddressBook, DATE_FORMAT};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const WINDOW_DAYS: i64 = 7;
pub const NO_BIRTHDAYS: &str = "Empty birthday list";
pub const NONE_THIS_WEEK: &str = "No birthdays on next week";

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekend birthdays move to Monday.
fn reporting_day(day: Weekday) -> Weekday {
    match day {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        other => other,
    }
}

pub fn upcoming_within_week(book: &AddressBook, today: NaiveDate) -> Result<CmdResult> {
    let mut buckets: [Vec<&str>; 7] = Default::default();
    let mut any_birthday = false;

    for record in book.iter() {
        let Ok(birthday) = record.birthday() else {
            continue;
        };
        any_birthday = true;

        let Some(mut occurrence) = birthday.occurrence_in(today.year()) else {
            continue;
        };
        if occurrence < today {
            match birthday.occurrence_in(today.year() + 1) {
                Some(next) => occurrence = next,
                None => continue,
            }
        }

        let delta = (occurrence - today).num_days();
        if delta < WINDOW_DAYS {
            let day = reporting_day(occurrence.weekday());
            buckets[day.num_days_from_monday() as usize].push(record.name());
        }
    }

    if !any_birthday {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NO_BIRTHDAYS)));
    }

    let mut result = CmdResult::default();
    for day in WEEK {
        let names = &buckets[day.num_days_from_monday() as usize];
        if !names.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "{}: {}",
                day_name(day),
                names.join(", ")
            )));
        }
    }

    if result.messages.is_empty() {
        result.add_message(CmdMessage::info(NONE_THIS_WEEK));
    }
    Ok(result)
}

/// Parses the day offset for `upcoming-birthday`. Negative values look back.
pub fn parse_offset(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        AbookError::Usage(format!(
            "Please use a whole number of days, instead of {}",
            raw
        ))
    })
}

pub fn upcoming_on_offset(book: &AddressBook, today: NaiveDate, days: i64) -> Result<CmdResult> {
    let target = Duration::try_days(days)
        .and_then(|delta| today.checked_add_signed(delta))
        .ok_or_else(|| AbookError::Usage(format!("Offset of {} days is out of range", days)))?;
    let target_str = target.format(DATE_FORMAT).to_string();

    let matching: Vec<_> = book
        .iter()
        .filter(|record| {
            record
                .birthday()
                .ok()
                .and_then(|b| b.occurrence_in(target.year()))
                == Some(target)
        })
        .collect();

    if matching.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No birthdays on {}",
            target_str
        ))));
    }

    let names: Vec<&str> = matching.iter().map(|r| r.name()).collect();
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!(
            "Birthdays on {}: {}",
            target_str,
            names.join(", ")
        )))
        .with_listed_records(matching.into_iter().cloned().collect()))
}
