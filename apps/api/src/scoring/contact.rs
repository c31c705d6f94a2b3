use std::sync::LazyLock;

use regex::Regex;

use crate::scoring::models::ContactInfo;

// Word boundaries and digits are ASCII-only: a non-ASCII letter ends a token and
// non-ASCII digits never count.
const EMAIL_PATTERN: &str =
    r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)";
/// North-American 3-3-4 digits with optional `-` or `.` separators.
const PHONE_PATTERN: &str = r"(?-u:\b)[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}(?-u:\b)";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

pub fn detect_contact_info(resume_text: &str) -> ContactInfo {
    let lower = resume_text.to_lowercase();
    ContactInfo {
        has_email: EMAIL_RE.is_match(resume_text),
        has_phone: PHONE_RE.is_match(resume_text),
        has_linkedin: lower.contains("linkedin"),
        has_github: lower.contains("github"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_and_dashed_phone() {
        let contact = detect_contact_info("Jane Doe | jane@x.org | 555-123-4567");
        assert!(contact.has_email);
        assert!(contact.has_phone);
        assert!(!contact.has_linkedin);
        assert!(!contact.has_github);
    }

    #[test]
    fn test_phone_separator_variants() {
        assert!(detect_contact_info("5551234567").has_phone);
        assert!(detect_contact_info("555.123.4567").has_phone);
        assert!(detect_contact_info("call 555-123.4567 today").has_phone);
    }

    #[test]
    fn test_parenthesized_area_code_is_not_matched() {
        assert!(!detect_contact_info("(555) 123-4567").has_phone);
    }

    #[test]
    fn test_short_digit_runs_are_not_phones() {
        assert!(!detect_contact_info("Class of 2018, GPA 3.9").has_phone);
        assert!(!detect_contact_info("555-1234").has_phone);
    }

    #[test]
    fn test_email_needs_two_letter_tld() {
        assert!(!detect_contact_info("jane@localhost").has_email);
        assert!(!detect_contact_info("jane@x.c").has_email);
        assert!(detect_contact_info("first.last+cv@mail.example.co").has_email);
    }

    #[test]
    fn test_non_ascii_digits_are_not_phones() {
        assert!(!detect_contact_info("٥٥٥-١٢٣-٤٥٦٧").has_phone);
        assert!(!detect_contact_info("５５５１２３４５６７").has_phone);
    }

    #[test]
    fn test_email_next_to_non_ascii_letters() {
        assert!(detect_contact_info("contact: jane@x.orgé").has_email);
        assert!(detect_contact_info("correo:jane@x.org").has_email);
        assert!(detect_contact_info("ñjane@x.org").has_email);
    }

    #[test]
    fn test_profile_links_are_case_insensitive() {
        let contact = detect_contact_info("LinkedIn: /in/jane  GitHub: jane");
        assert!(contact.has_linkedin);
        assert!(contact.has_github);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(detect_contact_info(""), ContactInfo::default());
    }
}
