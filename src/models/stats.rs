//! Dashboard statistics
//!
//! Derived figures shown on the dashboard. Never persisted.

use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub team_members: u32,
    pub active_projects: u32,
    pub notifications: u32,
}

impl DashboardStats {
    pub const fn new(team_members: u32, active_projects: u32, notifications: u32) -> Self {
        Self {
            team_members,
            active_projects,
            notifications,
        }
    }
}

/// One day of the weekly activity chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyActivity {
    pub day: &'static str,
    /// Completion percentage
    pub progress: u8,
    pub tasks: u32,
}

const fn day(day: &'static str, progress: u8, tasks: u32) -> WeeklyActivity {
    WeeklyActivity {
        day,
        progress,
        tasks,
    }
}

/// Fixed activity series rendered under the stats cards
pub const WEEKLY_ACTIVITY: [WeeklyActivity; 7] = [
    day("Mon", 65, 12),
    day("Tue", 78, 15),
    day("Wed", 82, 18),
    day("Thu", 70, 14),
    day("Fri", 85, 20),
    day("Sat", 92, 22),
    day("Sun", 88, 19),
];
