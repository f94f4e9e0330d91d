//! Sign-up credential validation.
//!
//! Client-side checks applied before an identity ever reaches the
//! authentication backend. The backend remains the authority; these exist to
//! give immediate feedback and to reject obviously bad input early.

/// Result of validating an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailValidation {
    pub is_valid: bool,
    pub error: Option<String>,
}

/// Disposable email domains rejected at sign-up.
const DISPOSABLE_DOMAINS: [&str; 5] = [
    "10minutemail.com",
    "tempmail.org",
    "guerrillamail.com",
    "mailinator.com",
    "throwaway.email",
];

/// Validates email format and rejects disposable-domain addresses.
///
/// The format check is deliberately loose: one `@`, non-empty local part, and
/// a domain containing a dot. Anything stricter belongs to the backend.
#[must_use]
pub fn validate_email(email: &str) -> EmailValidation {
    let trimmed = email.trim().to_lowercase();
    if trimmed.is_empty() {
        return EmailValidation {
            is_valid: false,
            error: Some("Email is required".to_string()),
        };
    }

    let mut parts = trimmed.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    let well_formed = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !trimmed.contains(char::is_whitespace);

    if !well_formed {
        return EmailValidation {
            is_valid: false,
            error: Some("Invalid email format".to_string()),
        };
    }

    if DISPOSABLE_DOMAINS.contains(&domain) {
        return EmailValidation {
            is_valid: false,
            error: Some("Disposable email addresses are not allowed".to_string()),
        };
    }

    EmailValidation {
        is_valid: true,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_email() {
        assert!(validate_email("student@university.edu").is_valid);
        assert!(validate_email("  Mixed.Case@Example.ORG ").is_valid);
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["", "plain", "@no-local.com", "no-domain@", "a@b", "two@@x.com"] {
            assert!(!validate_email(bad).is_valid, "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_disposable_domains() {
        let result = validate_email("someone@mailinator.com");
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Disposable email addresses are not allowed")
        );
    }
}
