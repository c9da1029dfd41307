//! Duration rendering for reports and status output.
//!
//! Durations are displayed two ways: a unit-decomposed human string
//! ("1 hour 15 minutes 0 second") and a restricted hours/minutes/seconds
//! form used as the precise companion for totals. The decomposition is
//! deliberately calendar-naive: a week is 7 days, a month 30 days, a year
//! 12 months. These are display approximations, not date arithmetic.

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;

/// Formats a count with its unit label, pluralizing counts of two or more.
///
/// Zero and one both take the singular: "0 second", "1 hour", "2 hours".
pub fn plural(count: i64, unit: &str) -> String {
    if count == 0 || count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Renders a non-negative duration as a pluralized, unit-decomposed string.
///
/// A zero duration means "below the rounding resolution", not "nothing
/// happened", so it renders as `< {granularity} minute(s)` using the active
/// rounding granularity. Otherwise units are emitted from the largest
/// non-zero one downward: `to_human(90, 15)` is "1 minute 30 seconds",
/// never "0 years 0 months ... 1 minute 30 seconds".
pub fn to_human(seconds: i64, round_to_minutes: i64) -> String {
    if seconds == 0 {
        return format!("< {}", plural(round_to_minutes, "minute"));
    }

    let units = [
        ("year", YEAR),
        ("month", MONTH),
        ("week", WEEK),
        ("day", DAY),
        ("hour", HOUR),
        ("minute", MINUTE),
        ("second", 1),
    ];

    let mut remainder = seconds;
    let mut parts = Vec::new();
    for (label, size) in units {
        let count = remainder / size;
        remainder %= size;
        if count > 0 || !parts.is_empty() {
            parts.push(plural(count, label));
        }
    }

    parts.join(" ")
}

/// Renders a duration restricted to hours, minutes and seconds.
///
/// Used as the "precise" companion display for totals, where weeks or
/// months would hide the actual hour count.
pub fn to_hms(seconds: i64) -> String {
    let hours = seconds / HOUR;
    let minutes = (seconds % HOUR) / MINUTE;
    let secs = seconds % MINUTE;

    if hours > 0 {
        format!("{} {} {}", plural(hours, "hour"), plural(minutes, "minute"), plural(secs, "second"))
    } else if minutes > 0 {
        format!("{} {}", plural(minutes, "minute"), plural(secs, "second"))
    } else {
        plural(secs, "second")
    }
}
