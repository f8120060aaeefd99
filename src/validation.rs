//! Field validators shared by the signup and login forms.
//!
//! These mirror the checks the backend applies on its side; running them
//! here lets the form pages surface problems before a round trip.

pub const MSG_FULL_NAME_REQUIRED: &str = "Full name is required";
pub const MSG_FULL_NAME_TOO_SHORT: &str = "Full name must be at least 2 characters";
pub const MSG_FULL_NAME_TOO_LONG: &str = "Full name must be at most 64 characters";
pub const MSG_FULL_NAME_HAS_NUMBERS: &str = "Full name must not contain numbers";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_PASSWORD_WEAK: &str =
    "Password must be at least 8 characters and contain at least one letter and one number";
pub const MSG_CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const MSG_PASSWORDS_MISMATCH: &str = "Passwords do not match";

/// Accepts `local@domain.tld` shapes: no whitespace anywhere, exactly one
/// `@` region with a non-empty local part, and at least one dot after it.
pub fn validate_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Length >= 8 characters with at least one letter and one digit. No
/// upper bound and no symbol requirement.
pub fn validate_password(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Two empty strings do not count as a match.
pub fn validate_password_match(password: &str, confirm: &str) -> bool {
    password == confirm && !password.is_empty()
}

pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Full-name policy: required, trimmed length in [2, 64], no digits.
/// Returns the violation message, or `None` when the name is acceptable.
pub fn full_name_error(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(MSG_FULL_NAME_REQUIRED);
    }
    if trimmed.chars().count() < 2 {
        return Some(MSG_FULL_NAME_TOO_SHORT);
    }
    if trimmed.chars().count() > 64 {
        return Some(MSG_FULL_NAME_TOO_LONG);
    }
    if trimmed.chars().any(|c| c.is_ascii_digit()) {
        return Some(MSG_FULL_NAME_HAS_NUMBERS);
    }
    None
}

pub fn email_error(value: &str) -> Option<&'static str> {
    if !validate_required(value) {
        Some(MSG_EMAIL_REQUIRED)
    } else if !validate_email(value) {
        Some(MSG_EMAIL_INVALID)
    } else {
        None
    }
}

pub fn password_error(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(MSG_PASSWORD_REQUIRED)
    } else if !validate_password(value) {
        Some(MSG_PASSWORD_WEAK)
    } else {
        None
    }
}

pub fn confirm_password_error(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() {
        Some(MSG_CONFIRM_REQUIRED)
    } else if !validate_password_match(password, confirm) {
        Some(MSG_PASSWORDS_MISMATCH)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_addresses() {
        for valid in [
            "user@example.com",
            "a@b.co",
            "first.last@sub.domain.org",
            "user+tag@example.io",
        ] {
            assert!(validate_email(valid), "expected valid: {valid}");
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for invalid in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@domain",
            "user@@example.com",
            "user@exam ple.com",
            " user@example.com",
            "user@example.com ",
            "user@.com",
            "user@domain.",
        ] {
            assert!(!validate_email(invalid), "expected invalid: {invalid:?}");
        }
    }

    #[test]
    fn password_needs_length_letter_and_digit() {
        assert!(validate_password("abc123456"));
        assert!(validate_password("passw0rd"));
        assert!(!validate_password("abcdefgh"));
        assert!(!validate_password("12345678"));
        assert!(!validate_password("1234567"));
        assert!(!validate_password("a1"));
        assert!(!validate_password(""));
        // Length counts characters, not bytes.
        assert!(!validate_password("ñabc123"));
        assert!(validate_password("ñabc1234"));
    }

    #[test]
    fn password_match_rejects_empty_pair() {
        assert!(validate_password_match("secret12", "secret12"));
        assert!(!validate_password_match("secret12", "secret13"));
        assert!(!validate_password_match("", ""));
    }

    #[test]
    fn required_trims_whitespace() {
        assert!(validate_required("x"));
        assert!(validate_required("  x  "));
        assert!(!validate_required(""));
        assert!(!validate_required("   "));
    }

    #[test]
    fn full_name_policy() {
        assert_eq!(full_name_error("Alice Smith"), None);
        assert_eq!(full_name_error(""), Some(MSG_FULL_NAME_REQUIRED));
        assert_eq!(full_name_error("   "), Some(MSG_FULL_NAME_REQUIRED));
        assert_eq!(full_name_error("A"), Some(MSG_FULL_NAME_TOO_SHORT));
        assert_eq!(full_name_error(&"a".repeat(65)), Some(MSG_FULL_NAME_TOO_LONG));
        assert_eq!(full_name_error("Alice 3rd"), Some(MSG_FULL_NAME_HAS_NUMBERS));
        assert_eq!(full_name_error(&"a".repeat(64)), None);
    }

    #[test]
    fn field_error_helpers_pick_the_right_message() {
        assert_eq!(email_error(""), Some(MSG_EMAIL_REQUIRED));
        assert_eq!(email_error("nope"), Some(MSG_EMAIL_INVALID));
        assert_eq!(email_error("a@b.co"), None);
        assert_eq!(password_error(""), Some(MSG_PASSWORD_REQUIRED));
        assert_eq!(password_error("short"), Some(MSG_PASSWORD_WEAK));
        assert_eq!(password_error("longenough1"), None);
        assert_eq!(confirm_password_error("x1234567", ""), Some(MSG_CONFIRM_REQUIRED));
        assert_eq!(
            confirm_password_error("x1234567", "y1234567"),
            Some(MSG_PASSWORDS_MISMATCH)
        );
        assert_eq!(confirm_password_error("x1234567", "x1234567"), None);
    }
}
