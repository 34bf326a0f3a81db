// src/locale.rs
//! en-IN style date, time and number formatting.

use chrono::{Datelike, NaiveDate, Timelike};

/// `d/m/yyyy`, without zero padding.
pub fn format_date<D: Datelike>(date: &D) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// `h:mm:ss am|pm` on a twelve-hour clock.
pub fn format_time<T: Timelike>(time: &T) -> String {
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "pm" } else { "am" };
    format!("{}:{:02}:{:02} {}", hour, time.minute(), time.second(), suffix)
}

/// `d/m/yyyy, h:mm:ss am|pm`
pub fn format_date_time<T: Datelike + Timelike>(stamp: &T) -> String {
    format!("{}, {}", format_date(stamp), format_time(stamp))
}

/// Long month name and year, e.g. "January 2024". `None` for an impossible month.
pub fn period_name(year: i32, month: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|first| first.format("%B %Y").to_string())
}

/// Two fixed decimals.
pub fn format_metric(value: f64) -> String {
    to_fixed(value, 2)
}

/// A `0..=1` ratio as a percentage with one decimal, e.g. `0.915` becomes "91.5%".
pub fn format_percent(ratio: f64) -> String {
    format!("{}%", to_fixed(ratio * 100.0, 1))
}

/// Digits past the rounding position inspected for an exact tie. Any tie at the
/// precisions used here terminates well within this many digits.
const TIE_DIGITS: usize = 32;

/// Fixed-point formatting that rounds exact ties away from zero.
///
/// `{:.N}` rounds a value lying exactly halfway to the even digit (`12.125` to
/// "12.12"); reports print "12.13". Values that only look like ties in decimal,
/// such as `1.005` (stored just below), still round down.
fn to_fixed(value: f64, digits: usize) -> String {
    let rounded = format!("{:.*}", digits, value);
    if !value.is_finite() {
        return rounded;
    }

    let exact = format!("{:.*}", digits + TIE_DIGITS, value.abs());
    let dropped = &exact[exact.len() - TIE_DIGITS..];
    let is_tie = dropped.starts_with('5') && dropped[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return rounded;
    }

    let half_step = 0.5 / 10f64.powi(digits as i32);
    format!("{:.*}", digits, value + half_step.copysign(value))
}
