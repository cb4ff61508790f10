//! Interactive wizard session
//!
//! Walks the user through the wizard one field prompt at a time. Besides
//! field values, every prompt accepts `:back`, `:save` (save and exit) and
//! `:quit`.

use std::io::{BufRead, Write};

use crate::display::{format_errors, format_field_prompt, format_step_header, format_summary};
use crate::error::{OnboardError, OnboardResult};
use crate::models::OnboardingData;
use crate::storage::KeyValueStore;
use crate::wizard::{
    Clock, Field, FieldKind, Notification, OnboardingWizard, SubmitOutcome, WizardState,
};

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The wizard was submitted; the record is complete
    Completed(OnboardingData),
    /// Answers were saved for later
    SavedAndExited,
    /// The user left without saving answers
    Quit,
}

enum Input {
    Value(String),
    Back,
    Save,
    Quit,
}

/// Prompt-driven front end over an [`OnboardingWizard`]
pub struct PromptSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the wizard until it completes or the user leaves
    pub fn run<S, C>(&mut self, wizard: &mut OnboardingWizard<S, C>) -> OnboardResult<SessionEnd>
    where
        S: KeyValueStore,
        C: Clock,
    {
        writeln!(self.output, "Press Enter to keep a value. Commands: :back, :save, :quit")?;

        loop {
            let step = match wizard.state() {
                WizardState::Editing(step) => step,
                WizardState::Submitting | WizardState::Completed => {
                    return Err(OnboardError::transition(
                        "prompt",
                        wizard.current_step(),
                        "the wizard is no longer editable",
                    ))
                }
            };

            write!(self.output, "{}", format_step_header(step))?;

            match self.prompt_fields(wizard, step.fields())? {
                Some(Input::Back) => {
                    if let Err(e) = wizard.back() {
                        writeln!(self.output, "{}", e)?;
                    }
                    continue;
                }
                Some(Input::Save) => {
                    let mut notes: Vec<Notification> = Vec::new();
                    wizard.save_and_exit(&mut notes);
                    self.print_notifications(&notes)?;
                    return Ok(SessionEnd::SavedAndExited);
                }
                Some(Input::Quit) => return Ok(SessionEnd::Quit),
                Some(Input::Value(_)) | None => {}
            }

            if !wizard.validate() {
                writeln!(self.output)?;
                write!(self.output, "{}", format_errors(wizard.errors()))?;
                continue;
            }

            if !step.is_last() {
                wizard.next()?;
                continue;
            }

            writeln!(self.output)?;
            write!(self.output, "{}", format_summary(wizard.draft()))?;
            match self.read_input("Complete setup? (yes/no) [yes]: ")? {
                Input::Value(answer) if is_yes(&answer) => {}
                Input::Value(_) | Input::Back => {
                    wizard.back()?;
                    continue;
                }
                Input::Save => {
                    let mut notes: Vec<Notification> = Vec::new();
                    wizard.save_and_exit(&mut notes);
                    self.print_notifications(&notes)?;
                    return Ok(SessionEnd::SavedAndExited);
                }
                Input::Quit => return Ok(SessionEnd::Quit),
            }

            writeln!(self.output, "Setting up your workspace...")?;
            let mut notes: Vec<Notification> = Vec::new();
            let mut completed = None;
            let result = wizard.submit(&mut notes, |data| completed = Some(data));
            self.print_notifications(&notes)?;

            match result {
                Ok(SubmitOutcome::Completed) => {
                    if let Some(data) = completed {
                        return Ok(SessionEnd::Completed(data));
                    }
                }
                Ok(SubmitOutcome::Ignored) => {}
                Err(OnboardError::Submission(_)) => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Prompt every field of the step; stops early on a command
    fn prompt_fields<S, C>(
        &mut self,
        wizard: &mut OnboardingWizard<S, C>,
        fields: &[Field],
    ) -> OnboardResult<Option<Input>>
    where
        S: KeyValueStore,
        C: Clock,
    {
        for &field in fields {
            loop {
                let current = wizard.draft().value(field);
                match self.read_input(&format_field_prompt(field, &current))? {
                    Input::Value(raw) if raw.is_empty() => break,
                    Input::Value(raw) => {
                        let value = match resolve_choice(field, &raw) {
                            Ok(value) => value,
                            Err(message) => {
                                writeln!(self.output, "  ! {}", message)?;
                                continue;
                            }
                        };
                        match wizard.set_field(field, &value) {
                            Ok(()) => {
                                if let Some(message) = wizard.errors().get(field.key()) {
                                    writeln!(self.output, "  ! {}", message)?;
                                    continue;
                                }
                                break;
                            }
                            Err(e) => writeln!(self.output, "  ! {}", e)?,
                        }
                    }
                    command => return Ok(Some(command)),
                }
            }
        }
        Ok(None)
    }

    fn read_input(&mut self, prompt: &str) -> OnboardResult<Input> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(Input::Quit);
        }

        Ok(match line.trim() {
            ":back" => Input::Back,
            ":save" => Input::Save,
            ":quit" => Input::Quit,
            value => Input::Value(value.to_string()),
        })
    }

    fn print_notifications(&mut self, notes: &[Notification]) -> OnboardResult<()> {
        for note in notes {
            writeln!(self.output, "{}", note)?;
        }
        Ok(())
    }
}

/// Map the answer to a select field onto one of its option values
///
/// A select answer is either the 1-based number of an option or an option
/// value; anything else is rejected. Other fields pass through unchanged.
fn resolve_choice(field: Field, raw: &str) -> Result<String, String> {
    let options = match field.kind() {
        FieldKind::Select(options) => options,
        FieldKind::Text | FieldKind::Email => return Ok(raw.to_string()),
    };

    let by_number = raw
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i));
    by_number
        .or_else(|| options.iter().find(|o| o.value == raw))
        .map(|o| o.value.to_string())
        .ok_or_else(|| {
            format!(
                "Choose a number from 1 to {} for {}",
                options.len(),
                field.label()
            )
        })
}

fn is_yes(answer: &str) -> bool {
    answer.is_empty() || answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, OnboardingStore};
    use crate::wizard::{ManualClock, Step, WizardTiming};
    use std::io::Cursor;

    fn run_script<'a>(
        store: MemoryStore,
        clock: &'a ManualClock,
        script: &str,
    ) -> (SessionEnd, OnboardingWizard<MemoryStore, &'a ManualClock>, String) {
        let mut wizard = OnboardingWizard::restore(
            OnboardingStore::new(store),
            clock,
            WizardTiming::default(),
        );
        let mut session = PromptSession::new(Cursor::new(script.to_string()), Vec::new());
        let end = session.run(&mut wizard).unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (end, wizard, output)
    }

    #[test]
    fn test_complete_walkthrough() {
        let clock = ManualClock::default();
        let script = "Jane Doe\njane@co.com\nAcme\n1\n2\n2\n3\n\n";
        let (end, wizard, output) = run_script(MemoryStore::new(), &clock, script);

        let data = match end {
            SessionEnd::Completed(data) => data,
            other => panic!("unexpected end: {:?}", other),
        };
        assert_eq!(data.business_info.industry, "technology");
        assert_eq!(data.business_info.company_size, "11-50");
        assert_eq!(data.preferences.theme.as_str(), "dark");
        assert_eq!(data.preferences.dashboard_layout.as_str(), "spacious");
        assert!(wizard.store().is_complete());
        assert!(output.contains("[Success] Welcome aboard!"));
    }

    #[test]
    fn test_invalid_email_is_prompted_again() {
        let clock = ManualClock::default();
        let script = "Jane\nnot-an-email\njane@co.com\n:quit\n";
        let (end, wizard, output) = run_script(MemoryStore::new(), &clock, script);

        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("  ! Please enter a valid email address"));
        assert_eq!(wizard.current_step(), Step::BusinessInfo);
        assert!(wizard.store().load().is_empty());
    }

    #[test]
    fn test_save_and_exit_keeps_answers() {
        let clock = ManualClock::default();
        let script = "Jane Doe\njane@co.com\nAcme\n:save\n";
        let (end, wizard, output) = run_script(MemoryStore::new(), &clock, script);

        assert_eq!(end, SessionEnd::SavedAndExited);
        assert!(output.contains("[Info] Progress saved! You can continue later."));

        let saved = wizard.store().load();
        assert_eq!(saved.business_info.unwrap().company_name, "Acme");
        assert_eq!(wizard.store().load_progress(), 2);
    }

    #[test]
    fn test_back_from_business_step() {
        let clock = ManualClock::default();
        let script = "Jane Doe\njane@co.com\n:back\n\n\n:quit\n";
        let (end, wizard, _) = run_script(MemoryStore::new(), &clock, script);

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(wizard.current_step(), Step::BusinessInfo);
        assert_eq!(wizard.draft().personal_info.name, "Jane Doe");
    }

    #[test]
    fn test_end_of_input_quits() {
        let clock = ManualClock::default();
        let (end, _, _) = run_script(MemoryStore::new(), &clock, "Jane");
        assert_eq!(end, SessionEnd::Quit);
    }

    #[test]
    fn test_failed_submission_is_retried() {
        let clock = ManualClock::default();
        clock.fail_next_sleep();
        let script = "Jane Doe\njane@co.com\nAcme\n1\n1\n\n\n\n\n\n\n";
        let (end, _, output) = run_script(MemoryStore::new(), &clock, script);

        assert!(matches!(end, SessionEnd::Completed(_)));
        assert!(output.contains("[Error] Something went wrong. Please try again."));
    }

    #[test]
    fn test_select_rejects_values_outside_the_list() {
        let clock = ManualClock::default();
        let script = "Jane Doe\njane@co.com\nAcme\nAerospace\n1\n7\nlarge\n1000+\n:quit\n";
        let (end, wizard, output) = run_script(MemoryStore::new(), &clock, script);

        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("  ! Choose a number from 1 to 9 for Industry"));
        assert!(output.contains("  ! Choose a number from 1 to 6 for Company Size"));
        assert_eq!(wizard.draft().business_info.industry, "technology");
        assert_eq!(wizard.draft().business_info.company_size, "1000+");
        assert_eq!(wizard.current_step(), Step::Preferences);
    }

    #[test]
    fn test_resolve_choice() {
        assert_eq!(resolve_choice(Field::CompanySize, "6").unwrap(), "1000+");
        assert_eq!(resolve_choice(Field::CompanySize, "11-50").unwrap(), "11-50");
        assert_eq!(resolve_choice(Field::Industry, "media").unwrap(), "media");
        assert_eq!(resolve_choice(Field::Name, "1").unwrap(), "1");

        assert!(resolve_choice(Field::CompanySize, "7").is_err());
        assert!(resolve_choice(Field::CompanySize, "0").is_err());
        assert!(resolve_choice(Field::Industry, "Aerospace").is_err());
        assert!(resolve_choice(Field::Industry, "Technology").is_err());
    }
}
