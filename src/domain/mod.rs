//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — owned, immutable domain types
//! - `wire.rs` — raw serde structs matching the server payloads
//! - `convert.rs` — `TryFrom` conversions with field-level validation
//! - `client.rs` — sub-client with the endpoint methods
//!
//! The server transmits numbers as strings, flags as 0/1 integers, and blank
//! strings where it means "no value". The helpers below apply those rules
//! uniformly; every conversion either produces a fully populated entity or
//! fails with a [`DecodeError`] naming the offending field.

pub mod account;
pub mod ad;
pub mod balance;

use rust_decimal::Decimal;

use crate::error::DecodeError;

/// Parse a numeric-as-string field into an integer.
pub(crate) fn int_field(
    entity: &'static str,
    field: &'static str,
    raw: &str,
) -> Result<i64, DecodeError> {
    raw.trim().parse().map_err(|_| DecodeError::Int {
        entity,
        field,
        value: raw.to_string(),
    })
}

/// Parse a numeric-as-string field into a decimal amount.
pub(crate) fn decimal_field(
    entity: &'static str,
    field: &'static str,
    raw: &str,
) -> Result<Decimal, DecodeError> {
    raw.trim().parse().map_err(|_| DecodeError::Decimal {
        entity,
        field,
        value: raw.to_string(),
    })
}

/// Parse an optional numeric-as-string field. Blank means absent, never zero.
pub(crate) fn opt_decimal_field(
    entity: &'static str,
    field: &'static str,
    raw: &str,
) -> Result<Option<Decimal>, DecodeError> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        decimal_field(entity, field, raw).map(Some)
    }
}

/// Collapse a blank or whitespace-only string to an explicit absent value.
/// Non-blank values are stored trimmed.
pub(crate) fn opt_text(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize a 0/1 integer flag. Any non-zero value is true.
pub(crate) fn flag(raw: i64) -> bool {
    raw != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_field_parses_and_trims() {
        assert_eq!(int_field("E", "f", "123").unwrap(), 123);
        assert_eq!(int_field("E", "f", " 123 ").unwrap(), 123);
    }

    #[test]
    fn test_int_field_failure_names_the_field() {
        let err = int_field("MarketAd", "accountId", "abc").unwrap_err();
        assert!(err.to_string().contains("MarketAd.accountId"));
    }

    #[test]
    fn test_opt_decimal_blank_is_absent() {
        assert_eq!(opt_decimal_field("E", "f", "").unwrap(), None);
        assert_eq!(opt_decimal_field("E", "f", "   ").unwrap(), None);
        assert_eq!(
            opt_decimal_field("E", "f", "10.5").unwrap(),
            Some("10.5".parse().unwrap())
        );
    }

    #[test]
    fn test_opt_decimal_garbage_is_an_error() {
        assert!(opt_decimal_field("E", "f", "ten").is_err());
    }

    #[test]
    fn test_opt_text_collapses_blanks() {
        assert_eq!(opt_text(String::new()), None);
        assert_eq!(opt_text("   ".to_string()), None);
        assert_eq!(opt_text("  bank  ".to_string()), Some("bank".to_string()));
    }

    #[test]
    fn test_flag() {
        assert!(!flag(0));
        assert!(flag(1));
        assert!(flag(-1));
    }
}
