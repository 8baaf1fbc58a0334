//! Profile validation for identity-bearing records.
//!
//! Collects every violation rather than stopping at the first, so callers
//! can surface the full list: create/edit flows re-display the messages to
//! the user, and the seed pipeline aborts with all of them concatenated.

/// Name length bounds for last and first/middle names.
pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 50;

/// Validate a person profile. Returns every violation found.
pub fn validate_profile(last_name: &str, first_name: &str, email: &str) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(msg) = validate_name("Last name", last_name) {
        errors.push(msg);
    }
    if let Err(msg) = validate_name("First name", first_name) {
        errors.push(msg);
    }

    if email.trim().is_empty() {
        errors.push("Email must not be empty".to_string());
    } else if !email.contains('@') {
        errors.push(format!("Email '{email}' is not a valid address"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a single name field against the length bounds.
pub fn validate_name(label: &str, value: &str) -> Result<(), String> {
    let len = value.chars().count();
    if len < NAME_MIN_LEN || len > NAME_MAX_LEN {
        return Err(format!(
            "{label} must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile_passes() {
        assert!(validate_profile("Alexander", "Carson", "carson.alexander@school.com").is_ok());
    }

    #[test]
    fn test_all_violations_are_collected() {
        let errors = validate_profile("Al", "X", "not-an-email").unwrap_err();
        assert_eq!(errors.len(), 3, "expected one message per violation: {errors:?}");
    }

    #[test]
    fn test_empty_email_reported_once() {
        let errors = validate_profile("Alexander", "Carson", "  ").unwrap_err();
        assert_eq!(errors, vec!["Email must not be empty".to_string()]);
    }
}
