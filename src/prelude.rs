pub use crate::application::{ContactApplication, log_submission};
pub use crate::components::{ContactForm, KeyEffect, TextEditState, TextField};
pub use crate::contact::{
    CONTACT_RULES, ContactDraft, ContactDraftField, ContactErrors, ContactFormController,
    contact_controller,
};
pub use crate::form::{
    FormController, FormError, FormModel, FormOptions, FormResult, SubmitOutcome, SubmitState,
    ValidationRule,
};
