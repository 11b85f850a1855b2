mod contact_form;
mod text_edit_state;
mod text_field;

pub use contact_form::ContactForm;
pub use text_edit_state::{KeyEffect, KeyModifiers, TextEditState};
pub use text_field::TextField;
