//! Field validation
//!
//! Pure functions that map raw field values to a set of per-field error
//! messages. An empty set means the fields are valid.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{DashboardLayout, Theme};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Field name to error message; a missing key means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error` against `field` if there is one
    pub fn add(&mut self, field: &'static str, error: Option<String>) {
        if let Some(message) = error {
            self.0.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Fails when `value` is empty or whitespace only
pub fn validate_required(value: &str, field_label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required", field_label))
    } else {
        None
    }
}

/// Fails when `email` is empty or is not of the form `local@domain.tld`
pub fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

pub fn validate_personal_info(name: &str, email: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add("name", validate_required(name, "Name"));
    errors.add("email", validate_email(email));
    errors
}

pub fn validate_business_info(
    company_name: &str,
    industry: &str,
    company_size: &str,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add("companyName", validate_required(company_name, "Company name"));
    errors.add("industry", validate_required(industry, "Industry"));
    errors.add("companySize", validate_required(company_size, "Company size"));
    errors
}

/// Preferences carry no field-level errors; both values are typed and always set
pub fn validate_preferences(_theme: Theme, _layout: DashboardLayout) -> ValidationErrors {
    ValidationErrors::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        for blank in ["", " ", "\t\n", "   "] {
            assert_eq!(
                validate_required(blank, "Name"),
                Some("Name is required".to_string())
            );
        }
        assert_eq!(validate_required(" Jane ", "Name"), None);
    }

    #[test]
    fn test_email_accepts_plain_address() {
        assert_eq!(validate_email("user@example.com"), None);
        assert_eq!(validate_email("jane@co.com"), None);
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert_eq!(
            validate_email(""),
            Some("Email is required".to_string())
        );
        for bad in [
            "plainaddress",
            "user@example",
            "user.example.com",
            "user@@example.com",
            "us er@example.com",
            "@example.com",
            "user@.",
        ] {
            assert_eq!(
                validate_email(bad),
                Some("Please enter a valid email address".to_string()),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_personal_info_errors() {
        let errors = validate_personal_info("  ", "nope");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));

        assert!(validate_personal_info("Jane Doe", "jane@co.com").is_empty());
    }

    #[test]
    fn test_business_info_errors() {
        let errors = validate_business_info("Acme", "", " ");
        assert_eq!(errors.get("companyName"), None);
        assert_eq!(errors.get("industry"), Some("Industry is required"));
        assert_eq!(errors.get("companySize"), Some("Company size is required"));

        assert!(validate_business_info("Acme", "technology", "11-50").is_empty());
    }

    #[test]
    fn test_preferences_never_fail() {
        for theme in Theme::ALL {
            for layout in DashboardLayout::ALL {
                assert!(validate_preferences(theme, layout).is_empty());
            }
        }
    }

    #[test]
    fn test_display_joins_messages() {
        let errors = validate_business_info("", "", "");
        assert_eq!(
            errors.to_string(),
            "Company name is required; Company size is required; Industry is required"
        );
    }
}
