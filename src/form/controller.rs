use thiserror::Error;

use super::validation::{FormModel, ValidationRule, first_violation};

pub type SubmitHandler<T> = Box<dyn FnMut(&T)>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormOptions {
    /// Clear a field's error as soon as the field is edited. Off by default,
    /// so errors stay until the next submit attempt.
    pub clear_error_on_edit: bool,
    pub focus_first_error_on_submit: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            clear_error_on_edit: false,
            focus_first_error_on_submit: true,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome<T> {
    /// Every field passed. Carries the values handed to the submit handler.
    Submitted(T),
    /// At least one field failed; see `FormController::errors`.
    Rejected,
}

impl<T> SubmitOutcome<T> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

#[derive(Clone, Debug)]
pub struct FormSnapshot<T> {
    pub model: T,
    pub errors: T,
    pub submit_state: SubmitState,
    pub submit_count: u32,
    pub is_dirty: bool,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("invalid submit state transition: {from:?} -> {to:?}")]
    InvalidStateTransition { from: SubmitState, to: SubmitState },
}

pub type FormResult<T> = Result<T, FormError>;

/// Owns the draft and error state of one form.
///
/// The error state has the same shape as the model: each field holds either
/// an empty string or the message of the first rule it violated during the
/// last validation.
pub struct FormController<T: FormModel> {
    options: FormOptions,
    rules: &'static [ValidationRule<T>],
    initial_model: T,
    model: T,
    errors: T,
    submit_state: SubmitState,
    submit_count: u32,
    first_error: Option<T::Field>,
    on_submit: Option<SubmitHandler<T>>,
}

impl<T: FormModel> FormController<T> {
    pub fn new(rules: &'static [ValidationRule<T>], options: FormOptions) -> Self {
        Self::with_model(T::default(), rules, options)
    }

    /// Starts from a prefilled draft. Both `reset` and a successful
    /// `submit` return the draft to `initial`, not to `T::default()`.
    pub fn with_model(
        initial: T,
        rules: &'static [ValidationRule<T>],
        options: FormOptions,
    ) -> Self {
        Self {
            options,
            rules,
            model: initial.clone(),
            initial_model: initial,
            errors: empty_errors(),
            submit_state: SubmitState::Idle,
            submit_count: 0,
            first_error: None,
            on_submit: None,
        }
    }

    /// Registers the handler that receives validated values, replacing any
    /// previous one.
    pub fn on_submit(&mut self, handler: impl FnMut(&T) + 'static) -> &mut Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn model(&self) -> &T {
        &self.model
    }

    pub fn errors(&self) -> &T {
        &self.errors
    }

    pub fn error(&self, field: T::Field) -> Option<&str> {
        let message = self.errors.get(field);
        (!message.is_empty()).then_some(message)
    }

    pub fn first_error(&self) -> Option<T::Field> {
        self.first_error
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn is_valid(&self) -> bool {
        T::fields()
            .iter()
            .all(|field| self.errors.get(*field).is_empty())
    }

    pub fn is_dirty(&self) -> bool {
        T::fields()
            .iter()
            .any(|field| self.model.get(*field) != self.initial_model.get(*field))
    }

    /// Writes `value` into the draft. Never validates.
    pub fn set(&mut self, field: T::Field, value: impl Into<String>) {
        self.model.set(field, value.into());
        if self.options.clear_error_on_edit {
            self.errors.set(field, String::new());
            self.first_error = first_error_field(&self.errors);
        }
    }

    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
        let field = name.parse::<T::Field>()?;
        self.set(field, value);
        Ok(())
    }

    /// Runs every rule against the draft and overwrites the whole error state.
    pub fn validate_form(&mut self) -> bool {
        for field in T::fields() {
            let message = first_violation(self.rules, &self.model, *field).unwrap_or_default();
            self.errors.set(*field, message.to_owned());
        }
        self.first_error = first_error_field(&self.errors);
        self.first_error.is_none()
    }

    pub fn validate_field(&mut self, field: T::Field) -> bool {
        let message = first_violation(self.rules, &self.model, field).unwrap_or_default();
        self.errors.set(field, message.to_owned());
        self.first_error = first_error_field(&self.errors);
        message.is_empty()
    }

    /// Validates the draft; when every field passes, hands it to the submit
    /// handler and resets draft and errors. On failure the draft is kept
    /// and the handler is not called.
    pub fn submit(&mut self) -> FormResult<SubmitOutcome<T>> {
        self.transition(SubmitState::Validating)?;
        self.submit_count = self.submit_count.saturating_add(1);

        if !self.validate_form() {
            self.transition(SubmitState::Failed)?;
            tracing::debug!(
                submit_count = self.submit_count,
                first_error = %self.first_error.map(|field| field.to_string()).unwrap_or_default(),
                "form submission rejected"
            );
            return Ok(SubmitOutcome::Rejected);
        }

        self.transition(SubmitState::Submitting)?;
        let model = self.model.clone();
        match self.on_submit.as_mut() {
            Some(handler) => handler(&model),
            None => tracing::warn!("form submitted without a registered submit handler"),
        }

        self.model = self.initial_model.clone();
        self.errors = empty_errors();
        self.first_error = None;
        self.transition(SubmitState::Succeeded)?;
        tracing::debug!(submit_count = self.submit_count, "form submitted");
        Ok(SubmitOutcome::Submitted(model))
    }

    /// Back to the initial draft with no errors.
    pub fn reset(&mut self) -> FormResult<()> {
        self.model = self.initial_model.clone();
        self.errors = empty_errors();
        self.first_error = None;
        self.transition(SubmitState::Idle)
    }

    pub fn clear_errors(&mut self) {
        self.errors = empty_errors();
        self.first_error = None;
    }

    pub fn snapshot(&self) -> FormSnapshot<T> {
        FormSnapshot {
            model: self.model.clone(),
            errors: self.errors.clone(),
            submit_state: self.submit_state,
            submit_count: self.submit_count,
            is_dirty: self.is_dirty(),
            is_valid: self.is_valid(),
        }
    }

    fn transition(&mut self, next: SubmitState) -> FormResult<()> {
        self.submit_state = transition_submit_state(self.submit_state, next)?;
        Ok(())
    }
}

pub(super) fn transition_submit_state(
    current: SubmitState,
    next: SubmitState,
) -> FormResult<SubmitState> {
    if current == next {
        return Ok(next);
    }

    let allowed = matches!(
        (current, next),
        (SubmitState::Idle, SubmitState::Validating)
            | (SubmitState::Validating, SubmitState::Submitting)
            | (SubmitState::Validating, SubmitState::Failed)
            | (SubmitState::Submitting, SubmitState::Succeeded)
            // A handler that unwound left the state at `Submitting`.
            | (SubmitState::Submitting, SubmitState::Validating)
            | (SubmitState::Succeeded, SubmitState::Validating)
            | (SubmitState::Failed, SubmitState::Validating)
            | (_, SubmitState::Idle)
    );
    if !allowed {
        return Err(FormError::InvalidStateTransition {
            from: current,
            to: next,
        });
    }
    Ok(next)
}

fn empty_errors<T: FormModel>() -> T {
    let mut errors = T::default();
    for field in T::fields() {
        errors.set(*field, String::new());
    }
    errors
}

fn first_error_field<T: FormModel>(errors: &T) -> Option<T::Field> {
    T::fields()
        .iter()
        .copied()
        .find(|field| !errors.get(*field).is_empty())
}
