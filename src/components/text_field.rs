use gpui::{
    AnyElement, ClickEvent, FocusHandle, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
    rgb,
};

use super::text_edit_state::TextEditState;

type KeyDownHandler = Box<dyn Fn(&KeyDownEvent, &mut Window, &mut gpui::App)>;

const LABEL_COLOR: u32 = 0x343a40;
const TEXT_COLOR: u32 = 0x212529;
const PLACEHOLDER_COLOR: u32 = 0x868e96;
const BORDER_COLOR: u32 = 0xced4da;
const BORDER_FOCUS_COLOR: u32 = 0x228be6;
const ERROR_COLOR: u32 = 0xfa5252;
const CARET: &str = "\u{258f}";

/// Labelled text box with an optional error line below it.
///
/// Holds no state of its own: the owning view passes the current
/// [`TextEditState`] in and receives keystrokes through `on_key_down`.
#[derive(IntoElement)]
pub struct TextField {
    id: SharedString,
    label: SharedString,
    state: TextEditState,
    placeholder: Option<SharedString>,
    error: Option<SharedString>,
    multiline: bool,
    min_rows: usize,
    focus_handle: FocusHandle,
    on_key_down: Option<KeyDownHandler>,
}

impl TextField {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        focus_handle: FocusHandle,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            state: TextEditState::default(),
            placeholder: None,
            error: None,
            multiline: false,
            min_rows: 4,
            focus_handle,
            on_key_down: None,
        }
    }

    pub fn state(mut self, state: TextEditState) -> Self {
        self.state = state;
        self
    }

    pub fn placeholder(mut self, value: impl Into<SharedString>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    pub fn error(mut self, value: Option<impl Into<SharedString>>) -> Self {
        self.error = value.map(Into::into);
        self
    }

    pub fn multiline(mut self, value: bool) -> Self {
        self.multiline = value;
        self
    }

    pub fn min_rows(mut self, rows: usize) -> Self {
        self.min_rows = rows.max(1);
        self
    }

    pub fn on_key_down(
        mut self,
        handler: impl Fn(&KeyDownEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_key_down = Some(Box::new(handler));
        self
    }

    fn render_text(&self, focused: bool) -> AnyElement {
        if self.state.is_empty() && !focused {
            return div()
                .text_color(rgb(PLACEHOLDER_COLOR))
                .child(self.placeholder.clone().unwrap_or_default())
                .into_any_element();
        }

        let text = if focused {
            format!(
                "{}{CARET}{}",
                self.state.before_caret(),
                self.state.after_caret()
            )
        } else {
            self.state.value.clone()
        };
        div()
            .w_full()
            .text_color(rgb(TEXT_COLOR))
            .child(SharedString::from(text))
            .into_any_element()
    }
}

impl RenderOnce for TextField {
    fn render(self, window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        let focused = self.focus_handle.is_focused(window);
        let border = if self.error.is_some() {
            rgb(ERROR_COLOR)
        } else if focused {
            rgb(BORDER_FOCUS_COLOR)
        } else {
            rgb(BORDER_COLOR)
        };

        let mut input = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .w_full()
            .px_3()
            .py_2()
            .border_1()
            .border_color(border)
            .rounded_md()
            .cursor_text()
            .child(self.render_text(focused));
        if self.multiline {
            input = input.min_h(px(self.min_rows as f32 * 20.0 + 16.0));
        }

        let focus_on_click = self.focus_handle.clone();
        input = input.on_click(move |_: &ClickEvent, window, cx| {
            window.focus(&focus_on_click);
            window.refresh();
        });
        if let Some(handler) = self.on_key_down {
            input = input.on_key_down(move |event, window, cx| handler(event, window, cx));
        }

        let mut field = div()
            .flex()
            .flex_col()
            .gap_1()
            .w_full()
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(LABEL_COLOR))
                    .child(self.label.clone()),
            )
            .child(input);

        if let Some(error) = self.error {
            field = field.child(div().text_xs().text_color(rgb(ERROR_COLOR)).child(error));
        }

        field
    }
}
