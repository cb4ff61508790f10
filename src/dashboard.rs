//! Dashboard projection
//!
//! Turns a completed onboarding record into what the dashboard shows. The
//! figures are mock data looked up from the company size band.

use std::fmt;
use std::time::Duration;

use crate::error::OnboardResult;
use crate::models::{DashboardStats, OnboardingData, WeeklyActivity, WEEKLY_ACTIVITY};
use crate::wizard::Clock;

/// Company size bands used as the stats lookup key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySizeBand {
    Micro,
    Small,
    Medium,
    Large,
    VeryLarge,
    /// `1000+` and anything unrecognized
    Enterprise,
}

impl CompanySizeBand {
    pub fn parse(company_size: &str) -> Self {
        match company_size {
            "1-10" => Self::Micro,
            "11-50" => Self::Small,
            "51-200" => Self::Medium,
            "201-500" => Self::Large,
            "501-1000" => Self::VeryLarge,
            _ => Self::Enterprise,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        match self {
            Self::Micro => DashboardStats::new(8, 3, 12),
            Self::Small => DashboardStats::new(32, 8, 24),
            Self::Medium => DashboardStats::new(156, 15, 45),
            Self::Large => DashboardStats::new(324, 28, 67),
            Self::VeryLarge => DashboardStats::new(742, 42, 89),
            Self::Enterprise => DashboardStats::new(1250, 67, 134),
        }
    }
}

/// Mock stats for a company size
pub fn project_stats(company_size: &str) -> DashboardStats {
    CompanySizeBand::parse(company_size).stats()
}

/// Direction and size of a stat's change, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trend {
    pub percent: u32,
    pub is_positive: bool,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_positive { '+' } else { '-' };
        write!(f, "{}{}%", sign, self.percent)
    }
}

/// One of the headline cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u32,
    pub trend: Trend,
}

/// Everything the dashboard renders for one onboarding record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub data: OnboardingData,
    pub stats: DashboardStats,
}

impl Dashboard {
    pub fn new(data: OnboardingData) -> Self {
        let stats = project_stats(&data.business_info.company_size);
        Self { data, stats }
    }

    /// Build the dashboard after the simulated stats load
    pub fn load<C: Clock>(data: OnboardingData, clock: &C, delay: Duration) -> OnboardResult<Self> {
        clock.sleep(delay)?;
        Ok(Self::new(data))
    }

    pub fn greeting(&self) -> String {
        format!("Welcome back, {}!", self.data.personal_info.first_name())
    }

    pub fn initials(&self) -> String {
        self.data.personal_info.initials()
    }

    /// "Company • Industry" line under the greeting
    pub fn company_line(&self) -> String {
        format!(
            "{} \u{2022} {}",
            self.data.business_info.company_name, self.data.business_info.industry
        )
    }

    /// "Joined May 1, 2024", if the record has a completion time
    pub fn joined(&self) -> Option<String> {
        self.data
            .completed_at
            .map(|at| format!("Joined {}", at.format("%B %-d, %Y")))
    }

    pub fn cards(&self) -> [StatCard; 3] {
        [
            StatCard {
                title: "Team Members",
                value: self.stats.team_members,
                trend: Trend {
                    percent: 12,
                    is_positive: true,
                },
            },
            StatCard {
                title: "Active Projects",
                value: self.stats.active_projects,
                trend: Trend {
                    percent: 8,
                    is_positive: true,
                },
            },
            StatCard {
                title: "Notifications",
                value: self.stats.notifications,
                trend: Trend {
                    percent: 3,
                    is_positive: false,
                },
            },
        ]
    }

    pub fn weekly_activity(&self) -> &'static [WeeklyActivity] {
        &WEEKLY_ACTIVITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessInfo, PersonalInfo, UserPreferences};
    use crate::wizard::ManualClock;
    use chrono::{TimeZone, Utc};

    fn record(size: &str) -> OnboardingData {
        OnboardingData {
            personal_info: PersonalInfo::new("Jane Doe", "jane@co.com"),
            business_info: BusinessInfo::new("Acme", "technology", size),
            preferences: UserPreferences::default(),
            completed_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()),
        }
    }

    #[test]
    fn test_lookup_table() {
        assert_eq!(project_stats("1-10"), DashboardStats::new(8, 3, 12));
        assert_eq!(project_stats("11-50"), DashboardStats::new(32, 8, 24));
        assert_eq!(project_stats("51-200"), DashboardStats::new(156, 15, 45));
        assert_eq!(project_stats("201-500"), DashboardStats::new(324, 28, 67));
        assert_eq!(project_stats("501-1000"), DashboardStats::new(742, 42, 89));
    }

    #[test]
    fn test_unknown_sizes_use_default_band() {
        for size in ["1000+", "bogus", ""] {
            assert_eq!(project_stats(size), DashboardStats::new(1250, 67, 134));
        }
    }

    #[test]
    fn test_dashboard_view() {
        let dashboard = Dashboard::new(record("11-50"));
        assert_eq!(dashboard.greeting(), "Welcome back, Jane!");
        assert_eq!(dashboard.initials(), "JD");
        assert_eq!(dashboard.company_line(), "Acme \u{2022} technology");
        assert_eq!(dashboard.joined().as_deref(), Some("Joined May 1, 2024"));

        let cards = dashboard.cards();
        assert_eq!(cards[0].value, 32);
        assert_eq!(cards[2].trend.to_string(), "-3%");
        assert_eq!(dashboard.weekly_activity().len(), 7);
    }

    #[test]
    fn test_load_waits_on_clock() {
        let clock = ManualClock::default();
        let dashboard =
            Dashboard::load(record("1-10"), &clock, Duration::from_millis(1500)).unwrap();

        assert_eq!(dashboard.stats, DashboardStats::new(8, 3, 12));
        assert_eq!(clock.sleeps(), vec![Duration::from_millis(1500)]);
    }
}
