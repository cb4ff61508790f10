//! Onboarding record
//!
//! The aggregate of all three steps. The store persists the partial form,
//! where every slice is optional; a record is complete once all slices are
//! present and `completed_at` is set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::business::BusinessInfo;
use super::personal::PersonalInfo;
use super::preferences::UserPreferences;

/// A completed onboarding record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    pub personal_info: PersonalInfo,
    pub business_info: BusinessInfo,
    pub preferences: UserPreferences,

    /// When the wizard was submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl OnboardingData {
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// An onboarding record under construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialOnboardingData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_info: Option<BusinessInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl PartialOnboardingData {
    /// True when no slice has been recorded
    pub fn is_empty(&self) -> bool {
        self.personal_info.is_none()
            && self.business_info.is_none()
            && self.preferences.is_none()
            && self.completed_at.is_none()
    }

    /// Shallow merge: every slice present in `update` replaces the stored one whole
    pub fn merge(&mut self, update: PartialOnboardingData) {
        if update.personal_info.is_some() {
            self.personal_info = update.personal_info;
        }
        if update.business_info.is_some() {
            self.business_info = update.business_info;
        }
        if update.preferences.is_some() {
            self.preferences = update.preferences;
        }
        if update.completed_at.is_some() {
            self.completed_at = update.completed_at;
        }
    }

    /// The full record, if every slice is present and the wizard was submitted
    pub fn to_complete(&self) -> Option<OnboardingData> {
        match (
            &self.personal_info,
            &self.business_info,
            self.preferences,
            self.completed_at,
        ) {
            (Some(personal), Some(business), Some(preferences), Some(completed_at)) => {
                Some(OnboardingData {
                    personal_info: personal.clone(),
                    business_info: business.clone(),
                    preferences,
                    completed_at: Some(completed_at),
                })
            }
            _ => None,
        }
    }
}

impl From<OnboardingData> for PartialOnboardingData {
    fn from(data: OnboardingData) -> Self {
        Self {
            personal_info: Some(data.personal_info),
            business_info: Some(data.business_info),
            preferences: Some(data.preferences),
            completed_at: data.completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;

    fn personal() -> PersonalInfo {
        PersonalInfo::new("Jane Doe", "jane@co.com")
    }

    #[test]
    fn test_merge_replaces_whole_slices() {
        let mut stored = PartialOnboardingData {
            personal_info: Some(personal()),
            business_info: Some(BusinessInfo::new("Acme", "retail", "1-10")),
            ..Default::default()
        };

        stored.merge(PartialOnboardingData {
            business_info: Some(BusinessInfo::new("Globex", "", "")),
            ..Default::default()
        });

        assert_eq!(stored.personal_info, Some(personal()));
        assert_eq!(
            stored.business_info,
            Some(BusinessInfo::new("Globex", "", ""))
        );
    }

    #[test]
    fn test_to_complete_requires_timestamp() {
        let mut partial = PartialOnboardingData {
            personal_info: Some(personal()),
            business_info: Some(BusinessInfo::new("Acme", "retail", "1-10")),
            preferences: Some(UserPreferences::default()),
            completed_at: None,
        };
        assert!(partial.to_complete().is_none());

        partial.completed_at = Some(Utc::now());
        let data = partial.to_complete().unwrap();
        assert!(data.is_complete());
        assert_eq!(data.preferences.theme, Theme::Light);
    }

    #[test]
    fn test_partial_omits_missing_slices() {
        let partial = PartialOnboardingData {
            personal_info: Some(personal()),
            ..Default::default()
        };
        let json = serde_json::to_string(&partial).unwrap();
        assert_eq!(
            json,
            r#"{"personalInfo":{"name":"Jane Doe","email":"jane@co.com"}}"#
        );
        assert!(PartialOnboardingData::default().is_empty());
    }

    #[test]
    fn test_reads_browser_timestamp() {
        let json = r#"{
            "personalInfo": {"name": "Jane Doe", "email": "jane@co.com"},
            "businessInfo": {"companyName": "Acme", "industry": "finance", "companySize": "11-50"},
            "preferences": {"theme": "dark", "dashboardLayout": "spacious"},
            "completedAt": "2024-05-01T12:30:00.000Z"
        }"#;
        let partial: PartialOnboardingData = serde_json::from_str(json).unwrap();
        let data = partial.to_complete().unwrap();
        assert_eq!(data.business_info.company_size, "11-50");
        assert_eq!(data.preferences.theme, Theme::Dark);
    }
}
