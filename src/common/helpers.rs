// Format predicates and helpers for safe logging

use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::char_len;

/// Characters a phone field may contain, with no minimum length
pub static PHONE_CHARSET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("phone charset regex is valid"));

/// Same character set as above, but at least 10 characters after the optional `+`
static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone number regex is valid"));

pub const MAX_NAME_LENGTH: usize = 100;

/// Standalone phone format check, stricter than the check-in form's pattern
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(phone)
}

/// True when the trimmed name is non-empty and the raw name fits in 100 characters.
///
/// The upper bound is measured on the untrimmed input.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && char_len(name) <= MAX_NAME_LENGTH
}

/// Masks phone numbers for safe logging
/// Keeps only the last 4 digits
///
/// # Example
/// ```
/// use checkin_validation::common::safe_phone_log;
/// assert_eq!(safe_phone_log("+1 555-123-4567"), "***4567");
/// ```
pub fn safe_phone_log(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() > 4 {
        let tail: String = digits[digits.len() - 4..].iter().collect();
        format!("***{}", tail)
    } else {
        "***".to_string()
    }
}
