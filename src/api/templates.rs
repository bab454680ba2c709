use crate::domain::Profile;

pub const PROGRAM_PLACEHOLDER: &str = "{program}";
pub const FIRST_NAME_PLACEHOLDER: &str = "{first_name}";

pub const DEFAULT_PROGRAM: &str = "our study";
pub const DEFAULT_SUBJECT: &str =
    "Thank you for participating in {program}; here is your incentive payment";
pub const PERSONAL_NOTE: &str =
    "Thank you for playing, {first_name}! We hope you'll participate in additional experiments.";
pub const FIXED_NOTE: &str =
    "Thank you for playing, we hope you'll participate in additional experiments.";

/// Text sent along with each payout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplates {
    program: String,
    subject: String,
    note: String,
}

impl MessageTemplates {
    pub fn new(
        program: impl Into<String>,
        subject: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            subject: subject.into(),
            note: note.into(),
        }
    }

    /// Default wording: strict sheets have names, so their notes are personal
    pub fn for_profile(profile: Profile, program: impl Into<String>) -> Self {
        let note = if profile.is_strict() {
            PERSONAL_NOTE
        } else {
            FIXED_NOTE
        };
        Self::new(program, DEFAULT_SUBJECT, note)
    }

    /// Batch email subject; `{first_name}` only resolves when the whole batch
    /// goes to people sharing one first name
    pub fn subject(&self, first_name: Option<&str>) -> String {
        self.render(&self.subject, first_name)
    }

    /// Per-item note
    pub fn note(&self, first_name: Option<&str>) -> String {
        self.render(&self.note, first_name)
    }

    fn render(&self, template: &str, first_name: Option<&str>) -> String {
        template
            .replace(PROGRAM_PLACEHOLDER, &self.program)
            .replace(FIRST_NAME_PLACEHOLDER, first_name.unwrap_or_default())
    }
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self::for_profile(Profile::Strict, DEFAULT_PROGRAM)
    }
}
