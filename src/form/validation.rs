use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::str::FromStr;

use super::controller::FormError;

/// A form whose fields are all plain text.
///
/// Usually derived with `#[derive(FormModel)]`, which also generates the
/// `Field` enum.
pub trait FormModel: Clone + Default + 'static {
    type Field: Copy + Eq + Ord + Hash + Debug + Display + FromStr<Err = FormError> + 'static;

    /// Every field, in declaration order.
    fn fields() -> &'static [Self::Field];
    fn get(&self, field: Self::Field) -> &str;
    fn set(&mut self, field: Self::Field, value: String);
}

pub type FieldCheck = fn(&str) -> bool;

/// One constraint on one field: `check` returns `true` when the value is
/// acceptable, otherwise `message` is reported for the field.
pub struct ValidationRule<T: FormModel> {
    pub field: T::Field,
    pub check: FieldCheck,
    pub message: &'static str,
}

impl<T: FormModel> ValidationRule<T> {
    pub const fn new(field: T::Field, check: FieldCheck, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }

    pub fn passes(&self, model: &T) -> bool {
        (self.check)(model.get(self.field))
    }
}

impl<T: FormModel> Debug for ValidationRule<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish()
    }
}

/// Message of the first rule for `field` that `model` violates, in table order.
pub fn first_violation<T: FormModel>(
    rules: &[ValidationRule<T>],
    model: &T,
    field: T::Field,
) -> Option<&'static str> {
    rules
        .iter()
        .filter(|rule| rule.field == field)
        .find(|rule| !rule.passes(model))
        .map(|rule| rule.message)
}
