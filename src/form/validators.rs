//! Pure per-field validators. Each one applies its rules in order and
//! returns the message of the first violated rule, or `None` when the
//! value passes. Validators never fail any other way (no panics, no
//! `Result`): a message is data, not an error.

use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

// Deliberately permissive: no whitespace, one `@`, and at least one `.`
// somewhere after it. Shapes like `a@b..com` are accepted.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// First and last name share the same rules; `label` distinguishes the
/// messages ("First name", "Last name").
pub fn validate_name(value: &str, label: &str) -> Option<String> {
    if value.is_empty() {
        return Some(format!("{} is required", label));
    }
    if value.chars().count() < NAME_MIN_LEN {
        return Some(format!("{} must be at least {} characters", label, NAME_MIN_LEN));
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Some(format!("{} must be {} characters or fewer", label, NAME_MAX_LEN));
    }
    if !NAME_RE.is_match(value) {
        return Some(format!("{} can only contain letters and spaces", label));
    }
    None
}

pub fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Email is required".to_string());
    }
    if !EMAIL_RE.is_match(value) {
        return Some("Enter a valid email address".to_string());
    }
    None
}

pub fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_string());
    }
    if value.chars().count() < PASSWORD_MIN_LEN {
        return Some(format!("Password must be at least {} characters", PASSWORD_MIN_LEN));
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number".to_string());
    }
    if !value.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Some(format!(
            "Password must contain at least one special character ({})",
            PASSWORD_SPECIALS
        ));
    }
    None
}

pub fn validate_confirm_password(value: &str, password: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Please confirm your password".to_string());
    }
    if value != password {
        return Some("Passwords do not match".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules_in_order() {
        assert_eq!(validate_name("", "First name"), Some("First name is required".to_string()));
        assert_eq!(
            validate_name("J", "First name"),
            Some("First name must be at least 2 characters".to_string())
        );
        let long = "a".repeat(51);
        assert_eq!(
            validate_name(&long, "Last name"),
            Some("Last name must be 50 characters or fewer".to_string())
        );
        assert_eq!(
            validate_name("J0e", "First name"),
            Some("First name can only contain letters and spaces".to_string())
        );
        assert_eq!(validate_name("Jo", "First name"), None);
        assert_eq!(validate_name("Mary Jane", "First name"), None);
    }

    #[test]
    fn test_email_accepts_permissive_shapes() {
        assert_eq!(validate_email("jo@x.com"), None);
        // Consecutive dots are allowed on purpose.
        assert_eq!(validate_email("a@b..com"), None);
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert_eq!(validate_email(""), Some("Email is required".to_string()));
        assert!(validate_email("plainaddress").is_some());
        assert!(validate_email("no dot@domain com").is_some());
        assert!(validate_email("missing@tld").is_some());
        assert!(validate_email("two@@x.com").is_some());
    }

    #[test]
    fn test_password_rules_in_order() {
        assert_eq!(validate_password(""), Some("Password is required".to_string()));
        assert_eq!(
            validate_password("Ab1!"),
            Some("Password must be at least 8 characters".to_string())
        );
        assert_eq!(
            validate_password("ABCDEFG1"),
            Some("Password must contain at least one lowercase letter".to_string())
        );
        // Length and lowercase pass before the uppercase rule fires.
        assert_eq!(
            validate_password("abcdefgh"),
            Some("Password must contain at least one uppercase letter".to_string())
        );
        assert_eq!(
            validate_password("Abcdefgh"),
            Some("Password must contain at least one number".to_string())
        );
        assert_eq!(
            validate_password("Abcdefg1"),
            Some("Password must contain at least one special character (!@#$%^&*)".to_string())
        );
        assert_eq!(validate_password("Abcdef1!"), None);
    }

    #[test]
    fn test_confirm_password() {
        assert_eq!(
            validate_confirm_password("", "Abcdef1!"),
            Some("Please confirm your password".to_string())
        );
        assert_eq!(
            validate_confirm_password("Abcdef1?", "Abcdef1!"),
            Some("Passwords do not match".to_string())
        );
        assert_eq!(validate_confirm_password("Abcdef1!", "Abcdef1!"), None);
        // Equality is exact, even when both values would fail the
        // password validator.
        assert_eq!(validate_confirm_password("abcdefgh", "abcdefgh"), None);
    }
}
