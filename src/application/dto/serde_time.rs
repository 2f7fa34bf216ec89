// src/application/dto/serde_time.rs
//! Date formats used by serialized DTOs.

use chrono::{DateTime, Utc};
use serde::Serializer;

/// `Jan 05, 2024`: abbreviated month, zero-padded day, ISO week-based year.
pub const EXPORT_DATE_FORMAT: &str = "%b %d, %G";

pub fn format_export_date(value: &DateTime<Utc>) -> String {
    value.format(EXPORT_DATE_FORMAT).to_string()
}

pub mod export_date {
    use super::*;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_export_date(value))
    }
}
