//! Field validation applied at the input boundary.
//!
//! Dates are `YYYY-MM-DD` strings and stay strings in storage; ISO dates make
//! plain string comparison order-preserving, so the due/start check compares
//! the raw values after both have parsed.

use crate::error::{StoreError, StoreResult};
use crate::types::Priority;
use chrono::NaiveDate;

/// Check that `value` parses as a `YYYY-MM-DD` date.
///
/// chrono accepts flexible-width numeric fields ("2022-6-6", "022-06-06"),
/// which would break the lexical due/start comparison, so the parsed date
/// must round-trip back to the exact input.
pub fn validate_date(value: &str) -> StoreResult<()> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) if date.format("%Y-%m-%d").to_string() == value => Ok(()),
        _ => Err(StoreError::date_format(value)),
    }
}

/// Check that `due` is a well-formed date strictly after `start`.
pub fn validate_due(due: &str, start: &str) -> StoreResult<()> {
    validate_date(due)?;
    if due <= start {
        return Err(StoreError::due_not_after_start(start));
    }
    Ok(())
}

/// Check that `value` names one of the three priorities, any casing.
/// The stored value keeps the caller's casing; this only gates admission.
pub fn validate_priority(value: &str) -> StoreResult<()> {
    Priority::parse(value)
        .map(|_| ())
        .ok_or_else(|| StoreError::invalid_priority(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn date_good() {
        assert!(validate_date("2022-06-06").is_ok());
        assert!(validate_date("1999-12-31").is_ok());
    }

    #[test]
    fn date_bad() {
        for bad in ["022-06-06", "2022_06_06", "2022-13-01", "not a date", ""] {
            let err = validate_date(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::DateFormat, "value: {bad}");
        }
    }

    #[test]
    fn date_requires_zero_padded_fields() {
        // Parseable by chrono, but not the canonical YYYY-MM-DD shape
        for bad in ["2022-6-6", "2022-06-6", "2022-6-06", "22-06-06"] {
            let err = validate_date(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::DateFormat, "value: {bad}");
        }
    }

    #[test]
    fn due_after_start_ok() {
        assert!(validate_due("2022-06-06", "2022-06-05").is_ok());
        assert!(validate_due("2023-01-01", "2022-12-31").is_ok());
    }

    #[test]
    fn due_equal_or_before_start_fails() {
        for (due, start) in [
            ("2022-06-05", "2022-06-06"),
            ("2022-06-06", "2022-06-06"),
            ("2020-01-01", "2022-01-01"),
        ] {
            let err = validate_due(due, start).unwrap_err();
            assert_eq!(err.code, ErrorCode::DateFormat);
            assert!(err.message.contains(start));
        }
    }

    #[test]
    fn due_malformed_fails_before_ordering_check() {
        let err = validate_due("022-06-06", "2022-01-01").unwrap_err();
        assert_eq!(err.code, ErrorCode::DateFormat);
    }

    #[test]
    fn priority_good() {
        for p in ["high", "HIGH", "High", "low", "medium"] {
            assert!(validate_priority(p).is_ok(), "value: {p}");
        }
    }

    #[test]
    fn priority_bad() {
        for p in ["low p", "", "urgent", "1"] {
            let err = validate_priority(p).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidPriority, "value: {p}");
        }
    }
}
