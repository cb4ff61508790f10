//! Dashboard formatting

use crate::dashboard::Dashboard;

const CHART_WIDTH: usize = 20;

pub fn format_dashboard(dashboard: &Dashboard) -> String {
    let mut output = String::new();
    let data = &dashboard.data;

    output.push_str(&format!("({}) {}\n", dashboard.initials(), dashboard.greeting()));
    output.push_str(&format!("{}\n", dashboard.company_line()));
    if let Some(joined) = dashboard.joined() {
        output.push_str(&format!("{}\n", joined));
    }
    output.push('\n');

    for card in dashboard.cards() {
        output.push_str(&format!(
            "{:<16} {:>6}  {}\n",
            card.title, card.value, card.trend
        ));
    }
    output.push('\n');

    output.push_str("Weekly Progress\n");
    for day in dashboard.weekly_activity() {
        let filled = day.progress as usize * CHART_WIDTH / 100;
        output.push_str(&format!(
            "  {}  {:<width$}  {:>3}%  {:>2} tasks\n",
            day.day,
            "#".repeat(filled),
            day.progress,
            day.tasks,
            width = CHART_WIDTH
        ));
    }
    output.push('\n');

    output.push_str("Your Preferences\n");
    output.push_str(&format!("  Theme:  {}\n", data.preferences.theme));
    output.push_str(&format!("  Layout: {}\n", data.preferences.dashboard_layout));
    output.push_str(&format!("  Industry: {}\n", data.business_info.industry_label()));
    output.push_str(&format!(
        "  Company size: {}\n",
        data.business_info.company_size_label()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessInfo, OnboardingData, PersonalInfo, UserPreferences};

    #[test]
    fn test_format_dashboard() {
        let dashboard = Dashboard::new(OnboardingData {
            personal_info: PersonalInfo::new("Jane Doe", "jane@co.com"),
            business_info: BusinessInfo::new("Acme", "finance", "1000+"),
            preferences: UserPreferences::default(),
            completed_at: None,
        });

        let output = format_dashboard(&dashboard);
        assert!(output.starts_with("(JD) Welcome back, Jane!\n"));
        assert!(!output.contains("Joined"));
        assert!(output.contains("Team Members       1250  +12%"));
        assert!(output.contains("  Mon  #############          65%  12 tasks"));
        assert!(output.contains("  Industry: Finance"));
        assert!(output.contains("  Company size: 1000+ employees"));
    }
}
