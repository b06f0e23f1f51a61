//! Wall-clock → UTC resolution against the embedded IANA database.
//!
//! DST anomalies are surfaced, never guessed: a spring-forward gap is an
//! error directing the caller to a UTC timestamp, and a fall-back fold is an
//! error unless the caller disambiguates with `fold`.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;

/// Version of the compiled-in IANA timezone database.
pub fn tzdb_version() -> &'static str {
    chrono_tz::IANA_TZDB_VERSION
}

/// Resolve a naive local wall-clock time in a named zone to UTC.
///
/// `fold` selects the first (0) or second (1) occurrence of a wall time that
/// happens twice across a DST fall-back; it is ignored for unambiguous times.
pub fn resolve_local_to_utc(
    wall: NaiveDateTime,
    timezone_name: &str,
    fold: Option<u8>,
) -> Result<DateTime<Utc>, TimeError> {
    let tz: Tz = timezone_name
        .parse()
        .map_err(|_| TimeError::UnknownTimezone(timezone_name.to_string()))?;

    match tz.from_local_datetime(&wall) {
        LocalResult::None => Err(TimeError::NonexistentTime),
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(first, second) => match fold {
            None => Err(TimeError::AmbiguousTime),
            Some(0) => Ok(first.with_timezone(&Utc)),
            Some(1) => Ok(second.with_timezone(&Utc)),
            Some(other) => Err(TimeError::InvalidFold(other)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn wall(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn unknown_timezone_rejected() {
        let result = resolve_local_to_utc(wall(2024, 6, 1, 12, 0, 0), "Mars/Olympus", None);
        assert!(matches!(result, Err(TimeError::UnknownTimezone(_))));
    }

    #[test]
    fn plain_time_resolves() {
        let utc =
            resolve_local_to_utc(wall(1988, 2, 4, 16, 30, 0), "Asia/Shanghai", None).unwrap();
        assert_eq!(utc.hour(), 8);
        assert_eq!(utc.minute(), 30);
    }

    #[test]
    fn dst_gap_is_nonexistent() {
        // 2023-03-12 02:30 never happened in New York.
        let result = resolve_local_to_utc(wall(2023, 3, 12, 2, 30, 0), "America/New_York", None);
        assert!(matches!(result, Err(TimeError::NonexistentTime)));
    }

    #[test]
    fn dst_fold_requires_disambiguation() {
        // 2023-11-05 01:30 happened twice in New York.
        let result = resolve_local_to_utc(wall(2023, 11, 5, 1, 30, 0), "America/New_York", None);
        assert!(matches!(result, Err(TimeError::AmbiguousTime)));
    }

    #[test]
    fn fold_selects_occurrence() {
        let wall_time = wall(2023, 11, 5, 1, 30, 0);
        let first = resolve_local_to_utc(wall_time, "America/New_York", Some(0)).unwrap();
        let second = resolve_local_to_utc(wall_time, "America/New_York", Some(1)).unwrap();
        assert_eq!((second - first).num_seconds(), 3600);
    }

    #[test]
    fn fold_out_of_range_rejected() {
        let wall_time = wall(2023, 11, 5, 1, 30, 0);
        let result = resolve_local_to_utc(wall_time, "America/New_York", Some(2));
        assert!(matches!(result, Err(TimeError::InvalidFold(2))));
    }

    #[test]
    fn fold_ignored_when_unambiguous() {
        let a = resolve_local_to_utc(wall(2024, 6, 1, 12, 0, 0), "Asia/Shanghai", Some(1)).unwrap();
        let b = resolve_local_to_utc(wall(2024, 6, 1, 12, 0, 0), "Asia/Shanghai", None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tzdb_version_nonempty() {
        assert!(!tzdb_version().is_empty());
    }
}
