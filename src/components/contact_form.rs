use std::collections::BTreeMap;

use gpui::{
    ClickEvent, Context, FocusHandle, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, Render, StatefulInteractiveElement, Styled, Window, div, px, rgb,
};

use crate::contact::{ContactDraft, ContactDraftField, ContactFormController, contact_controller};
use crate::form::{FormModel, FormOptions, SubmitOutcome};

use super::text_edit_state::{KeyEffect, KeyModifiers, TextEditState};
use super::text_field::TextField;

struct FieldEditor {
    state: TextEditState,
    focus_handle: FocusHandle,
}

/// The contact page view. Owns the form engine; every edit goes through
/// [`ContactFormController::set`] and every change redraws the view.
pub struct ContactForm {
    controller: ContactFormController,
    editors: BTreeMap<ContactDraftField, FieldEditor>,
}

impl ContactForm {
    pub fn new(
        options: FormOptions,
        on_submit: impl FnMut(&ContactDraft) + 'static,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut controller = contact_controller(options);
        controller.on_submit(on_submit);
        let editors = ContactDraft::fields()
            .iter()
            .map(|field| {
                let editor = FieldEditor {
                    state: TextEditState::new(controller.model().get(*field)),
                    focus_handle: cx.focus_handle(),
                };
                (*field, editor)
            })
            .collect();
        Self {
            controller,
            editors,
        }
    }

    pub fn controller(&self) -> &ContactFormController {
        &self.controller
    }

    pub fn focus_handle(&self, field: ContactDraftField) -> Option<FocusHandle> {
        self.editors
            .get(&field)
            .map(|editor| editor.focus_handle.clone())
    }

    pub fn focus_field(&self, field: ContactDraftField, window: &mut Window, cx: &mut gpui::App) {
        if let Some(editor) = self.editors.get(&field) {
            window.focus(&editor.focus_handle);
        }
    }

    /// Same as pressing the submit button.
    pub fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        match self.controller.submit() {
            Ok(SubmitOutcome::Submitted(_)) => {
                self.sync_editors();
            }
            Ok(SubmitOutcome::Rejected) => {
                if self.controller.options().focus_first_error_on_submit
                    && let Some(field) = self.controller.first_error()
                {
                    self.focus_field(field, window, cx);
                }
            }
            Err(error) => tracing::error!(%error, "contact form submit failed"),
        }
        cx.notify();
    }

    fn handle_key(
        &mut self,
        field: ContactDraftField,
        event: &KeyDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let keystroke = &event.keystroke;
        let modifiers = KeyModifiers {
            control: keystroke.modifiers.control,
            platform: keystroke.modifiers.platform,
            function: keystroke.modifiers.function,
        };
        let Some(editor) = self.editors.get_mut(&field) else {
            return;
        };

        let effect = if (modifiers.control || modifiers.platform) && keystroke.key == "v" {
            match cx.read_from_clipboard().and_then(|item| item.text()) {
                Some(pasted) if editor.state.paste(&pasted, is_multiline(field)) => {
                    KeyEffect::Edited
                }
                _ => KeyEffect::Ignored,
            }
        } else {
            editor.state.apply_keystroke(
                &keystroke.key,
                keystroke.key_char.as_deref(),
                modifiers,
                is_multiline(field),
            )
        };

        match effect {
            KeyEffect::Edited => {
                self.controller.set(field, editor.state.value.clone());
                cx.stop_propagation();
                cx.notify();
            }
            KeyEffect::Moved => {
                cx.stop_propagation();
                cx.notify();
            }
            KeyEffect::Submit => {
                cx.stop_propagation();
                self.submit(window, cx);
            }
            KeyEffect::Ignored => {}
        }
    }

    fn sync_editors(&mut self) {
        for (field, editor) in &mut self.editors {
            let value = self.controller.model().get(*field);
            if editor.state.value != value {
                editor.state.set_value(value);
            }
        }
    }

    fn render_field(&self, field: ContactDraftField, cx: &mut Context<Self>) -> Option<TextField> {
        let editor = self.editors.get(&field)?;
        let text_field = TextField::new(
            field.as_str(),
            field_label(field),
            editor.focus_handle.clone(),
        )
        .state(editor.state.clone())
        .placeholder(field_placeholder(field))
        .multiline(is_multiline(field))
        .error(self.controller.error(field).map(str::to_owned))
        .on_key_down(cx.listener(move |this, event: &KeyDownEvent, window, cx| {
            this.handle_key(field, event, window, cx);
        }));
        Some(text_field)
    }
}

impl Render for ContactForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let fields = ContactDraft::fields()
            .iter()
            .filter_map(|field| self.render_field(*field, cx))
            .collect::<Vec<_>>();

        let submit = div()
            .id("contact-submit")
            .px_4()
            .py_2()
            .rounded_md()
            .bg(rgb(0x228be6))
            .text_color(rgb(0xffffff))
            .cursor_pointer()
            .hover(|style| style.bg(rgb(0x1c7ed6)))
            .child("Submit")
            .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                cx.stop_propagation();
                this.submit(window, cx);
            }));

        div()
            .id("contact-page")
            .size_full()
            .flex()
            .justify_center()
            .bg(rgb(0xf8f9fa))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .p_6()
                    .w_full()
                    .max_w(px(560.0))
                    .children(fields)
                    .child(div().flex().justify_end().child(submit)),
            )
    }
}

fn is_multiline(field: ContactDraftField) -> bool {
    field == ContactDraftField::Message
}

fn field_label(field: ContactDraftField) -> &'static str {
    match field {
        ContactDraftField::Name => "Name",
        ContactDraftField::Email => "Email",
        ContactDraftField::Message => "Message",
    }
}

fn field_placeholder(field: ContactDraftField) -> &'static str {
    match field {
        ContactDraftField::Name => "Your name",
        ContactDraftField::Email => "you@example.com",
        ContactDraftField::Message => "How can we help?",
    }
}
