/// Coerce a raw form field into an optional catalog item ID.
///
/// The field is accepted only when it is a non-empty run of ASCII digits.
/// Anything else (blank, signs, whitespace, letters) yields `None` and the
/// booking goes ahead without that item. This is silent coercion, not
/// validation: callers never see an error for a malformed ID.
///
/// Range is not checked here. A digit run too large for the storage column is
/// passed through and the insert fails with storage's own error. Digit runs
/// beyond `i64` saturate to `i64::MAX`, which storage rejects the same way.
pub fn parse_optional_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse::<i64>().unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_accepted() {
        assert_eq!(parse_optional_id("3"), Some(3));
        assert_eq!(parse_optional_id("0"), Some(0));
        assert_eq!(parse_optional_id("007"), Some(7));
    }

    #[test]
    fn test_non_digits_become_absent() {
        for raw in ["", " ", "-1", "+1", "1.5", "12 ", " 12", "abc", "1e3", "١٢"] {
            assert_eq!(parse_optional_id(raw), None, "input {:?}", raw);
        }
    }

    #[test]
    fn test_large_digit_runs_are_kept_for_storage_to_reject() {
        assert_eq!(parse_optional_id("2147483647"), Some(i32::MAX as i64));
        assert_eq!(parse_optional_id("2147483648"), Some(2147483648));
        assert_eq!(parse_optional_id("99999999999999999999"), Some(i64::MAX));
    }
}
