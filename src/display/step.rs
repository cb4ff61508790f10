//! Wizard step formatting
//!
//! Headers with a progress line, field prompts, inline errors, and the
//! summary shown before submission.

use crate::validation::ValidationErrors;
use crate::wizard::{Field, FieldKind, OnboardingDraft, Step};

/// Progress line, e.g. `[x] Personal Info  [>] Business Info  [ ] Preferences`
pub fn format_progress(current: Step) -> String {
    Step::ALL
        .iter()
        .map(|step| {
            let marker = if *step < current {
                "x"
            } else if *step == current {
                ">"
            } else {
                " "
            };
            format!("[{}] {}", marker, step.title())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn format_step_header(step: Step) -> String {
    let title = format!("Step {} of {}: {}", step.number(), Step::ALL.len(), step.title());
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_progress(step));
    output.push_str("\n\n");
    output.push_str(&title);
    output.push('\n');
    output.push_str(&"=".repeat(title.len()));
    output.push('\n');
    output.push_str(step.heading());
    output.push('\n');
    output.push_str(step.description());
    output.push('\n');
    output
}

/// Option list (for selects) followed by the prompt line itself
pub fn format_field_prompt(field: Field, current: &str) -> String {
    let mut output = String::new();
    if let FieldKind::Select(options) = field.kind() {
        output.push_str(&format!("{}:\n", field.label()));
        for (i, option) in options.iter().enumerate() {
            let marker = if option.value == current { '*' } else { ' ' };
            output.push_str(&format!("  {}{}. {}\n", marker, i + 1, option.label));
        }
        output.push_str("Select");
    } else {
        output.push_str(field.label());
    }

    if current.is_empty() {
        output.push_str(": ");
    } else {
        output.push_str(&format!(" [{}]: ", current));
    }
    output
}

pub fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|(_, message)| format!("  ! {}\n", message))
        .collect()
}

pub fn format_summary(draft: &OnboardingDraft) -> String {
    let mut output = String::new();
    output.push_str("Summary\n-------\n");
    for step in Step::ALL {
        for field in step.fields() {
            output.push_str(&format!("{:<18} {}\n", field.label(), draft.value(*field)));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_business_info;

    #[test]
    fn test_progress_markers() {
        assert_eq!(
            format_progress(Step::BusinessInfo),
            "[x] Personal Info  [>] Business Info  [ ] Preferences"
        );
    }

    #[test]
    fn test_text_prompt() {
        assert_eq!(format_field_prompt(Field::Name, ""), "Full Name: ");
        assert_eq!(
            format_field_prompt(Field::Email, "jane@co.com"),
            "Email Address [jane@co.com]: "
        );
    }

    #[test]
    fn test_select_prompt_marks_current() {
        let prompt = format_field_prompt(Field::Theme, "dark");
        assert!(prompt.starts_with("Theme Preference:\n"));
        assert!(prompt.contains("   1. Light\n"));
        assert!(prompt.contains("  *2. Dark\n"));
        assert!(prompt.ends_with("Select [dark]: "));
    }

    #[test]
    fn test_errors() {
        let errors = validate_business_info("Acme", "", "11-50");
        assert_eq!(format_errors(&errors), "  ! Industry is required\n");
    }

    #[test]
    fn test_summary_lists_every_field() {
        let summary = format_summary(&OnboardingDraft::default());
        assert!(summary.contains("Dashboard Layout   comfortable"));
        assert_eq!(summary.lines().count(), 2 + 7);
    }
}
