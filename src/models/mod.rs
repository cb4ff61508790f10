//! Core data models for OnboardFlow
//!
//! The answers collected by the wizard, the aggregate onboarding record, and
//! the derived dashboard statistics.

pub mod business;
pub mod onboarding;
pub mod personal;
pub mod preferences;
pub mod stats;

pub use business::{BusinessInfo, SelectOption, COMPANY_SIZE_OPTIONS, INDUSTRY_OPTIONS};
pub use onboarding::{OnboardingData, PartialOnboardingData};
pub use personal::PersonalInfo;
pub use preferences::{DashboardLayout, Theme, UserPreferences};
pub use stats::{DashboardStats, WeeklyActivity, WEEKLY_ACTIVITY};
