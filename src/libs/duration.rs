//! Free-text duration parsing.
//!
//! A duration is given either as a length or as a clock-time range on the
//! reference date:
//!
//! | Input        | Meaning                          | Hours at 10:00 |
//! |--------------|----------------------------------|----------------|
//! | `30`         | 30 minutes                       | 0.5            |
//! | `:45`        | 45 minutes                       | 0.75           |
//! | `3:12`       | 3 hours 12 minutes               | 3.2            |
//! | `8:30-9:50`  | from 8:30 to 9:50                | 1.333…         |
//! | `8:00-now`   | from 8:00 until the reference    | 2.0            |
//! | `8:30-`      | same as `8:30-now`               | 1.5            |
//! | `~9:00`      | same as `9:00-now`               | 1.0            |
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rlw::libs::duration::parse_hours;
//!
//! let now = NaiveDate::from_ymd_opt(2022, 6, 17).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! assert_eq!(parse_hours("1:30", now).unwrap(), 1.5);
//! assert_eq!(parse_hours("~9:00", now).unwrap(), 1.0);
//! ```

use super::error::{Error, Result};
use chrono::{NaiveDateTime, NaiveTime};

const RANGE_SEPARATOR: char = '-';
const UNTIL_NOW_PREFIX: char = '~';
const NOW: &str = "now";
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Converts a duration expression into decimal hours.
///
/// Inputs containing `-` or `~` are clock-time ranges on the date of
/// `reference`; everything else is a `[hours]:minutes` length or a bare
/// number of minutes.
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] when the text does not follow either
/// grammar, minutes are out of range, the range is empty or inverted, or the
/// result would not be strictly positive. Both grammars check the last case.
pub fn parse_hours(description: &str, reference: NaiveDateTime) -> Result<f64> {
    let description = description.trim();

    if description.contains(RANGE_SEPARATOR) || description.contains(UNTIL_NOW_PREFIX) {
        parse_range(description, reference)
    } else {
        parse_length(description)
    }
}

fn parse_length(description: &str) -> Result<f64> {
    let (hours, minutes) = match description.rsplit_once(':') {
        Some((hours, minutes)) if hours.is_empty() => (None, minutes),
        Some((hours, minutes)) => (Some(hours), minutes),
        None => (None, description),
    };

    let minutes: i64 = parse_number(description, minutes, "minutes")?;

    let hours = match hours {
        Some(hours) => {
            if !(0..=59).contains(&minutes) {
                return Err(Error::invalid_duration(description, format!("minutes must be between 0 and 59, got {}", minutes)));
            }
            let hours: i64 = parse_number(description, hours, "hours")?;
            if hours < 0 {
                return Err(Error::invalid_duration(description, "hours must not be negative"));
            }
            if hours == 0 && minutes == 0 {
                return Err(Error::invalid_duration(description, "duration must be greater than zero"));
            }
            hours as f64
        }
        None => {
            if minutes < 1 {
                return Err(Error::invalid_duration(description, "at least one minute is required"));
            }
            if description.contains(':') && minutes > 59 {
                return Err(Error::invalid_duration(description, format!("minutes must be between 0 and 59, got {}", minutes)));
            }
            0.0
        }
    };

    Ok(hours + minutes as f64 / 60.0)
}

fn parse_range(description: &str, reference: NaiveDateTime) -> Result<f64> {
    // `~T` is shorthand for `T-now`
    let until_now;
    let range = match description.strip_prefix(UNTIL_NOW_PREFIX) {
        Some(begin) => {
            until_now = format!("{}{}{}", begin.trim(), RANGE_SEPARATOR, NOW);
            until_now.as_str()
        }
        None => description,
    };

    let Some((begin, end)) = range.split_once(RANGE_SEPARATOR) else {
        return Err(Error::invalid_duration(description, "expected a range like 8:30-9:50"));
    };

    let begin = clock_time(description, begin.trim(), reference)?;
    let end = match end.trim() {
        "" | NOW => reference,
        end => clock_time(description, end, reference)?,
    };

    if begin >= end {
        return Err(Error::invalid_duration(description, "range must end after it begins"));
    }

    // Keeps the sub-second part of a `now` end
    let hours = (end - begin)
        .to_std()
        .map_err(|e| Error::invalid_duration(description, e.to_string()))?
        .as_secs_f64()
        / SECONDS_PER_HOUR;
    if hours <= 0.0 {
        return Err(Error::invalid_duration(description, "duration must be greater than zero"));
    }
    Ok(hours)
}

/// Places an `H:MM` clock time on the reference date, seconds zeroed.
fn clock_time(description: &str, clock: &str, reference: NaiveDateTime) -> Result<NaiveDateTime> {
    let Some((hour, minute)) = clock.split_once(':') else {
        return Err(Error::invalid_duration(description, format!("expected a clock time like 9:30, got '{}'", clock)));
    };
    let hour: u32 = parse_number(description, hour, "hour")?;
    let minute: u32 = parse_number(description, minute, "minute")?;

    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(|time| reference.date().and_time(time))
        .ok_or_else(|| Error::invalid_duration(description, format!("'{}' is not a valid clock time", clock)))
}

fn parse_number<T: std::str::FromStr>(description: &str, part: &str, what: &str) -> Result<T> {
    part.trim()
        .parse()
        .map_err(|_| Error::invalid_duration(description, format!("{} '{}' is not a number", what, part)))
}
