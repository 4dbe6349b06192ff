//! Field-level validation helpers shared by the request boundary and the
//! lifecycle services.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// `true` when the value is empty or only whitespace.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Reject empty or whitespace-only strings.
pub fn require_non_blank(value: &str, field: &str) -> Result<(), CoreError> {
    if is_blank(value) {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Unwrap a field the request must carry.
pub fn require_field<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Reject ids that can never name a row (BIGSERIAL starts at 1).
pub fn require_positive_id(id: DbId, field: &str) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive integer, got {id}"
        )));
    }
    Ok(())
}

/// Parse a date field.
///
/// Accepts a full RFC 3339 timestamp (`2025-01-01T12:00:00Z`) or a bare
/// calendar date (`2025-01-01`), which is taken as midnight UTC.
pub fn parse_date(raw: &str, field: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "{field} must be an ISO 8601 date (YYYY-MM-DD) or RFC 3339 timestamp, got '{raw}'"
            ))
        })
}

/// Parse an optional date field, passing `None` through.
pub fn parse_optional_date(raw: Option<&str>, field: &str) -> Result<Option<Timestamp>, CoreError> {
    raw.map(|r| parse_date(r, field)).transpose()
}
