use chrono::{DateTime, TimeZone};
use rand::Rng;
use std::fmt::Display;

const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Formats a timestamp as `YYYYMMDDHHMMSS`.
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format("%Y%m%d%H%M%S").to_string()
}

/// Random code of uppercase letters and digits.
pub fn random_alphanumeric(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())]))
        .collect()
}

/// Reference used when the caller does not supply one: a 7 character random
/// code followed by the epoch milliseconds of `timestamp`.
pub fn default_reference<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    format!("{}-{}", random_alphanumeric(7), timestamp.timestamp_millis())
}
