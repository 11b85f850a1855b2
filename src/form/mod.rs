mod controller;
mod validation;


pub use contact_form_derive::FormModel;
pub use controller::{
    FormController, FormError, FormOptions, FormResult, FormSnapshot, SubmitHandler,
    SubmitOutcome, SubmitState,
};
pub use validation::{FieldCheck, FormModel, ValidationRule, first_violation};
