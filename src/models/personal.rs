//! Personal info model
//!
//! The first step's answers: who the user is.

use serde::{Deserialize, Serialize};

/// Name and contact address of the person onboarding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
}

impl PersonalInfo {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// First word of the name, used for greetings
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// Up to two upper-cased initials taken from the words of the name
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_and_initials() {
        let info = PersonalInfo::new("jane ann doe", "jane@co.com");
        assert_eq!(info.first_name(), "jane");
        assert_eq!(info.initials(), "JA");
    }

    #[test]
    fn test_initials_of_empty_name() {
        let info = PersonalInfo::default();
        assert_eq!(info.first_name(), "");
        assert_eq!(info.initials(), "");
    }
}
