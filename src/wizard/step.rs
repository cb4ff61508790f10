//! Wizard steps
//!
//! The three screens of the wizard, the input fields each one renders, and
//! the in-progress answers ([`OnboardingDraft`]) they edit.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::{OnboardError, OnboardResult};
use crate::models::{
    BusinessInfo, DashboardLayout, OnboardingData, PartialOnboardingData, PersonalInfo,
    SelectOption, Theme, UserPreferences, COMPANY_SIZE_OPTIONS, INDUSTRY_OPTIONS,
};
use crate::validation::{
    validate_business_info, validate_personal_info, validate_preferences, ValidationErrors,
};

/// A screen of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    PersonalInfo,
    BusinessInfo,
    Preferences,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::PersonalInfo, Step::BusinessInfo, Step::Preferences];

    pub const FIRST: Step = Step::PersonalInfo;
    pub const LAST: Step = Step::Preferences;

    /// 1-based position, as persisted in the progress slot
    pub fn number(&self) -> i64 {
        match self {
            Self::PersonalInfo => 1,
            Self::BusinessInfo => 2,
            Self::Preferences => 3,
        }
    }

    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::PersonalInfo),
            2 => Some(Self::BusinessInfo),
            3 => Some(Self::Preferences),
            _ => None,
        }
    }

    /// The step at `n`, with out-of-range values moved to the nearest end
    pub fn clamped(n: i64) -> Self {
        Self::from_number(n.clamp(Self::FIRST.number(), Self::LAST.number()))
            .unwrap_or(Self::FIRST)
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    /// Short name shown in the progress bar
    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::BusinessInfo => "Business Info",
            Self::Preferences => "Preferences",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Welcome! Let's get to know you",
            Self::BusinessInfo => "Tell us about your business",
            Self::Preferences => "Customize your experience",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Tell us a bit about yourself to personalize your experience",
            Self::BusinessInfo => "Help us understand your company so we can tailor your workspace",
            Self::Preferences => "Choose your preferred theme and dashboard layout",
        }
    }

    /// Input fields rendered on this step, in display order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Self::PersonalInfo => &[Field::Name, Field::Email],
            Self::BusinessInfo => &[Field::CompanyName, Field::Industry, Field::CompanySize],
            Self::Preferences => &[Field::Theme, Field::DashboardLayout],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

const THEME_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "light",
        label: "Light",
    },
    SelectOption {
        value: "dark",
        label: "Dark",
    },
];

const LAYOUT_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "compact",
        label: "Compact",
    },
    SelectOption {
        value: "comfortable",
        label: "Comfortable",
    },
    SelectOption {
        value: "spacious",
        label: "Spacious",
    },
];

/// How a field is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Select(&'static [SelectOption]),
}

/// An input field of some step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    CompanyName,
    Industry,
    CompanySize,
    Theme,
    DashboardLayout,
}

impl Field {
    /// Key used in [`ValidationErrors`] and in the persisted record
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::CompanyName => "companyName",
            Self::Industry => "industry",
            Self::CompanySize => "companySize",
            Self::Theme => "theme",
            Self::DashboardLayout => "dashboardLayout",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::CompanyName => "Company Name",
            Self::Industry => "Industry",
            Self::CompanySize => "Company Size",
            Self::Theme => "Theme Preference",
            Self::DashboardLayout => "Dashboard Layout",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name | Self::CompanyName => FieldKind::Text,
            Self::Email => FieldKind::Email,
            Self::Industry => FieldKind::Select(INDUSTRY_OPTIONS),
            Self::CompanySize => FieldKind::Select(COMPANY_SIZE_OPTIONS),
            Self::Theme => FieldKind::Select(THEME_OPTIONS),
            Self::DashboardLayout => FieldKind::Select(LAYOUT_OPTIONS),
        }
    }

    /// The step whose screen shows this field
    pub fn step(&self) -> Step {
        match self {
            Self::Name | Self::Email => Step::PersonalInfo,
            Self::CompanyName | Self::Industry | Self::CompanySize => Step::BusinessInfo,
            Self::Theme | Self::DashboardLayout => Step::Preferences,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Answers collected so far, one slice per step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingDraft {
    pub personal_info: PersonalInfo,
    pub business_info: BusinessInfo,
    pub preferences: UserPreferences,
}

impl OnboardingDraft {
    /// Pre-populate from a saved record; missing slices keep their defaults
    pub fn from_saved(saved: PartialOnboardingData) -> Self {
        Self {
            personal_info: saved.personal_info.unwrap_or_default(),
            business_info: saved.business_info.unwrap_or_default(),
            preferences: saved.preferences.unwrap_or_default(),
        }
    }

    /// Slices for `step` and the steps before it; later slices are left out
    pub fn up_to(&self, step: Step) -> PartialOnboardingData {
        PartialOnboardingData {
            personal_info: Some(self.personal_info.clone()),
            business_info: (step >= Step::BusinessInfo).then(|| self.business_info.clone()),
            preferences: (step >= Step::Preferences).then_some(self.preferences),
            completed_at: None,
        }
    }

    /// The full record stamped with `completed_at`
    pub fn complete(&self, completed_at: DateTime<Utc>) -> OnboardingData {
        OnboardingData {
            personal_info: self.personal_info.clone(),
            business_info: self.business_info.clone(),
            preferences: self.preferences,
            completed_at: Some(completed_at),
        }
    }

    /// Current value of `field` as entered text
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Name => self.personal_info.name.clone(),
            Field::Email => self.personal_info.email.clone(),
            Field::CompanyName => self.business_info.company_name.clone(),
            Field::Industry => self.business_info.industry.clone(),
            Field::CompanySize => self.business_info.company_size.clone(),
            Field::Theme => self.preferences.theme.to_string(),
            Field::DashboardLayout => self.preferences.dashboard_layout.to_string(),
        }
    }

    /// Set `field` from entered text
    ///
    /// Text fields accept anything; validity is judged separately. Theme and
    /// layout must name one of their options.
    pub fn set(&mut self, field: Field, value: &str) -> OnboardResult<()> {
        match field {
            Field::Name => self.personal_info.name = value.to_string(),
            Field::Email => self.personal_info.email = value.to_string(),
            Field::CompanyName => self.business_info.company_name = value.to_string(),
            Field::Industry => self.business_info.industry = value.to_string(),
            Field::CompanySize => self.business_info.company_size = value.to_string(),
            Field::Theme => {
                self.preferences.theme = Theme::parse(value).ok_or_else(|| {
                    OnboardError::Validation(format!(
                        "Invalid theme: '{}'. Valid themes: light, dark",
                        value
                    ))
                })?;
            }
            Field::DashboardLayout => {
                self.preferences.dashboard_layout =
                    DashboardLayout::parse(value).ok_or_else(|| {
                        OnboardError::Validation(format!(
                            "Invalid dashboard layout: '{}'. Valid layouts: compact, comfortable, spacious",
                            value
                        ))
                    })?;
            }
        }
        Ok(())
    }

    /// View of the slice edited on `step`
    pub fn form(&self, step: Step) -> StepForm<'_> {
        match step {
            Step::PersonalInfo => StepForm::PersonalInfo(&self.personal_info),
            Step::BusinessInfo => StepForm::BusinessInfo(&self.business_info),
            Step::Preferences => StepForm::Preferences(&self.preferences),
        }
    }
}

/// One step's slice of the draft, dispatched by step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepForm<'a> {
    PersonalInfo(&'a PersonalInfo),
    BusinessInfo(&'a BusinessInfo),
    Preferences(&'a UserPreferences),
}

impl StepForm<'_> {
    pub fn step(&self) -> Step {
        match self {
            Self::PersonalInfo(_) => Step::PersonalInfo,
            Self::BusinessInfo(_) => Step::BusinessInfo,
            Self::Preferences(_) => Step::Preferences,
        }
    }

    pub fn fields(&self) -> &'static [Field] {
        self.step().fields()
    }

    pub fn validate(&self) -> ValidationErrors {
        match self {
            Self::PersonalInfo(info) => validate_personal_info(&info.name, &info.email),
            Self::BusinessInfo(info) => {
                validate_business_info(&info.company_name, &info.industry, &info.company_size)
            }
            Self::Preferences(prefs) => validate_preferences(prefs.theme, prefs.dashboard_layout),
        }
    }

    /// Whether the step may be left forwards
    pub fn is_valid(&self) -> bool {
        let no_errors = self.validate().is_empty();
        match self {
            Self::PersonalInfo(info) => {
                no_errors && !info.name.is_empty() && !info.email.is_empty()
            }
            Self::BusinessInfo(_) | Self::Preferences(_) => no_errors,
        }
    }
}
