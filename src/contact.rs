use std::sync::LazyLock;

use regex::Regex;

use crate::form::{FormController, FormModel, FormOptions, ValidationRule};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 500;

/// Values of the contact form, as typed.
#[derive(Clone, Debug, Default, Eq, PartialEq, FormModel)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field error messages; an empty field means no error.
pub type ContactErrors = ContactDraft;

pub type ContactFormController = FormController<ContactDraft>;

pub static CONTACT_RULES: &[ValidationRule<ContactDraft>] = &[
    ValidationRule::new(
        ContactDraftField::Name,
        name_long_enough,
        "Name must be at least 2 characters",
    ),
    ValidationRule::new(
        ContactDraftField::Name,
        name_short_enough,
        "Name can't exceed 50 characters",
    ),
    ValidationRule::new(ContactDraftField::Email, is_valid_email, "Invalid email format"),
    ValidationRule::new(
        ContactDraftField::Message,
        message_long_enough,
        "Message must be at least 10 characters",
    ),
    ValidationRule::new(
        ContactDraftField::Message,
        message_short_enough,
        "Message can't exceed 500 characters",
    ),
];

pub fn contact_controller(options: FormOptions) -> ContactFormController {
    FormController::new(CONTACT_RULES, options)
}

// Dots at the start and doubled dots are rejected separately; the regex crate
// has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

/// Length in UTF-16 code units, the way browsers measure input values.
/// Characters outside the Basic Multilingual Plane count twice.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn name_long_enough(value: &str) -> bool {
    utf16_len(value) >= NAME_MIN_CHARS
}

fn name_short_enough(value: &str) -> bool {
    utf16_len(value) <= NAME_MAX_CHARS
}

fn message_long_enough(value: &str) -> bool {
    utf16_len(value) >= MESSAGE_MIN_CHARS
}

fn message_short_enough(value: &str) -> bool {
    utf16_len(value) <= MESSAGE_MAX_CHARS
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactDraft::fields()
            .iter()
            .all(|field| self.get(*field).is_empty())
    }
}
