use std::fmt;

use serde::Serialize;

use crate::domain::digits::convert_digits;

pub const COUNTRY_CODE: &str = "880";
pub const LOCAL_PREFIX: &str = "0";
pub const LOCAL_NUMBER_LEN: usize = 11;

/// Reduces user input to a Bangladeshi local-form number.
///
/// Bengali digits are converted, everything that is not an ASCII digit is
/// dropped, and a leading `880` becomes `0`. With `truncate` the result is
/// capped at [`LOCAL_NUMBER_LEN`] digits. The prefix check is literal and runs
/// once; no length or plausibility validation happens here.
pub fn normalize_phone(value: &str, truncate: bool) -> String {
    let converted = convert_digits(value);
    let digits: String = converted.chars().filter(|ch| ch.is_ascii_digit()).collect();

    let mut out = match digits.strip_prefix(COUNTRY_CODE) {
        Some(rest) => {
            let mut local = String::with_capacity(LOCAL_PREFIX.len() + rest.len());
            local.push_str(LOCAL_PREFIX);
            local.push_str(rest);
            local
        }
        None => digits,
    };

    // Only ASCII digits remain, so byte length equals character count.
    if truncate && out.len() > LOCAL_NUMBER_LEN {
        out.truncate(LOCAL_NUMBER_LEN);
    }
    out
}

/// A phone number in local form, ready for an order's `customer_phone` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: &str) -> Self {
        Self(normalize_phone(raw, true))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_phone, PhoneNumber, LOCAL_NUMBER_LEN};

    const SAMPLES: [&str; 12] = [
        "",
        "abc",
        "০১৭১২৩৪৫৬৭৮",
        "+880 1712-345678",
        "8801712345678999",
        "880880123",
        "(+৮৮০) ১৭১২ ৩৪৫ ৬৭৮",
        "01712 345678 ext 9",
        "12",
        "999880",
        "880",
        "  +88 01712-345678  ",
    ];

    #[test]
    fn normalize_phone_converts_bengali_digits() {
        assert_eq!(normalize_phone("০১৭১২৩৪৫৬৭৮", true), "01712345678");
    }

    #[test]
    fn normalize_phone_strips_formatting_and_country_code() {
        assert_eq!(normalize_phone("+880 1712-345678", true), "01712345678");
    }

    #[test]
    fn normalize_phone_truncates_after_prefix_rewrite() {
        assert_eq!(normalize_phone("8801712345678999", true), "01712345678");
    }

    #[test]
    fn normalize_phone_keeps_full_value_without_truncation() {
        assert_eq!(normalize_phone("8801712345678999", false), "01712345678999");
    }

    #[test]
    fn normalize_phone_handles_empty_and_digitless_input() {
        assert_eq!(normalize_phone("", true), "");
        assert_eq!(normalize_phone("abc", true), "");
        assert_eq!(normalize_phone("abc", false), "");
    }

    #[test]
    fn normalize_phone_rewrites_prefix_only_at_start() {
        assert_eq!(normalize_phone("999880", true), "999880");
        assert_eq!(normalize_phone("0880123", false), "0880123");
    }

    #[test]
    fn normalize_phone_rewrites_prefix_once() {
        assert_eq!(normalize_phone("880880123", false), "0880123");
    }

    #[test]
    fn normalize_phone_bare_country_code() {
        assert_eq!(normalize_phone("880", true), "0");
    }

    #[test]
    fn normalize_phone_keeps_short_values() {
        assert_eq!(normalize_phone("12", true), "12");
    }

    #[test]
    fn normalize_phone_prefix_split_by_formatting() {
        // "+88 0..." collapses to 880... before the prefix check.
        assert_eq!(normalize_phone("  +88 01712-345678  ", true), "01712345678");
    }

    #[test]
    fn normalize_phone_outputs_only_ascii_digits() {
        for sample in SAMPLES {
            for truncate in [true, false] {
                let value = normalize_phone(sample, truncate);
                assert!(
                    value.chars().all(|ch| ch.is_ascii_digit()),
                    "non-digit in {value:?} from {sample:?}"
                );
            }
        }
    }

    #[test]
    fn normalize_phone_respects_length_bound() {
        for sample in SAMPLES {
            assert!(normalize_phone(sample, true).len() <= LOCAL_NUMBER_LEN);
        }
    }

    #[test]
    fn normalize_phone_is_idempotent() {
        for sample in SAMPLES {
            let once = normalize_phone(sample, false);
            let twice = normalize_phone(&once, false);
            assert_eq!(once, twice, "second pass changed {sample:?}");
        }
    }

    #[test]
    fn phone_number_uses_default_truncation() {
        let phone = PhoneNumber::new("+880 1712-345678 99");
        assert_eq!(phone.as_str(), "01712345678");
        assert_eq!(phone.len(), LOCAL_NUMBER_LEN);
        assert_eq!(phone.to_string(), "01712345678");
    }

    #[test]
    fn phone_number_empty_without_digits() {
        assert!(PhoneNumber::new("n/a").is_empty());
    }

    #[test]
    fn phone_number_serializes_as_string() {
        let phone = PhoneNumber::new("০১৭১২৩৪৫৬৭৮");
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"01712345678\"");
    }
}
