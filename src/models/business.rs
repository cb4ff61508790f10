//! Business info model
//!
//! The second step's answers. Industry and company size are kept as the raw
//! option values so that records written by other front ends load unchanged.

use serde::{Deserialize, Serialize};

/// A selectable value with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// Industries offered on the business step
pub const INDUSTRY_OPTIONS: &[SelectOption] = &[
    option("technology", "Technology"),
    option("healthcare", "Healthcare"),
    option("finance", "Finance"),
    option("education", "Education"),
    option("retail", "Retail"),
    option("manufacturing", "Manufacturing"),
    option("consulting", "Consulting"),
    option("media", "Media & Entertainment"),
    option("other", "Other"),
];

/// Company size bands offered on the business step
pub const COMPANY_SIZE_OPTIONS: &[SelectOption] = &[
    option("1-10", "1-10 employees"),
    option("11-50", "11-50 employees"),
    option("51-200", "51-200 employees"),
    option("201-500", "201-500 employees"),
    option("501-1000", "501-1000 employees"),
    option("1000+", "1000+ employees"),
];

/// Company details of the person onboarding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
}

impl BusinessInfo {
    pub fn new(
        company_name: impl Into<String>,
        industry: impl Into<String>,
        company_size: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            industry: industry.into(),
            company_size: company_size.into(),
        }
    }

    /// Display label for the stored industry, falling back to the raw value
    pub fn industry_label(&self) -> &str {
        label_for(INDUSTRY_OPTIONS, &self.industry)
    }

    /// Display label for the stored company size, falling back to the raw value
    pub fn company_size_label(&self) -> &str {
        label_for(COMPANY_SIZE_OPTIONS, &self.company_size)
    }
}

fn label_for<'a>(options: &'static [SelectOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label)
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let info = BusinessInfo::new("Acme", "technology", "11-50");
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["companySize"], "11-50");
    }

    #[test]
    fn test_labels() {
        let info = BusinessInfo::new("Acme", "media", "1000+");
        assert_eq!(info.industry_label(), "Media & Entertainment");
        assert_eq!(info.company_size_label(), "1000+ employees");

        let custom = BusinessInfo::new("Acme", "aerospace", "");
        assert_eq!(custom.industry_label(), "aerospace");
    }
}
