/// Result of feeding one keystroke to a [`TextEditState`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyEffect {
    /// The text changed.
    Edited,
    /// Only the caret moved.
    Moved,
    /// The keystroke asks the surrounding form to submit.
    Submit,
    Ignored,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KeyModifiers {
    pub control: bool,
    pub platform: bool,
    pub function: bool,
}

impl KeyModifiers {
    pub fn any(self) -> bool {
        self.control || self.platform || self.function
    }
}

/// Text plus caret of one editable field. The caret is a char index.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TextEditState {
    pub value: String,
    pub caret: usize,
}

impl TextEditState {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let caret = value.chars().count();
        Self { value, caret }
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the text and puts the caret at its end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    pub fn before_caret(&self) -> &str {
        &self.value[..byte_index_at_char(&self.value, self.caret)]
    }

    pub fn after_caret(&self) -> &str {
        &self.value[byte_index_at_char(&self.value, self.caret)..]
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let at = byte_index_at_char(&self.value, self.caret);
        self.value.insert_str(at, text);
        self.caret += text.chars().count();
        true
    }

    /// Inserts clipboard text. Single-line fields turn line breaks into
    /// spaces; multi-line fields normalize them to `\n`.
    pub fn paste(&mut self, text: &str, multiline: bool) -> bool {
        let text = if multiline {
            text.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            text.replace("\r\n", " ").replace(['\r', '\n'], " ")
        };
        self.insert_text(&text)
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.remove_char_range(self.caret - 1, self.caret);
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        self.remove_char_range(self.caret, self.caret + 1);
        true
    }

    pub fn move_to(&mut self, caret: usize) -> bool {
        let caret = caret.min(self.len());
        let moved = caret != self.caret;
        self.caret = caret;
        moved
    }

    pub fn move_vertically(&mut self, down: bool) -> bool {
        let (line, column) = line_col_from_char(&self.value, self.caret);
        let line_count = self.value.chars().filter(|ch| *ch == '\n').count() + 1;
        let target_line = if down {
            (line + 1).min(line_count - 1)
        } else {
            line.saturating_sub(1)
        };
        self.move_to(char_from_line_col(&self.value, target_line, column))
    }

    /// Applies a keystroke as gpui reports it: `key` is the key name and
    /// `key_char` the produced text, if any. Enter submits single-line fields
    /// and inserts a newline in multi-line ones; with a modifier it always
    /// submits.
    pub fn apply_keystroke(
        &mut self,
        key: &str,
        key_char: Option<&str>,
        modifiers: KeyModifiers,
        multiline: bool,
    ) -> KeyEffect {
        if key == "enter" {
            if multiline && !modifiers.any() {
                self.insert_text("\n");
                return KeyEffect::Edited;
            }
            return KeyEffect::Submit;
        }

        let edited = match key {
            "backspace" => Some(self.delete_backward()),
            "delete" => Some(self.delete_forward()),
            _ => None,
        };
        if let Some(edited) = edited {
            return if edited {
                KeyEffect::Edited
            } else {
                KeyEffect::Ignored
            };
        }

        let moved = match key {
            "left" => Some(self.move_to(self.caret.saturating_sub(1))),
            "right" => Some(self.move_to(self.caret + 1)),
            "home" => Some(self.move_to(0)),
            "end" => Some(self.move_to(self.len())),
            "up" if multiline => Some(self.move_vertically(false)),
            "down" if multiline => Some(self.move_vertically(true)),
            _ => None,
        };
        if let Some(moved) = moved {
            return if moved {
                KeyEffect::Moved
            } else {
                KeyEffect::Ignored
            };
        }

        if modifiers.any() || matches!(key, "tab" | "escape") {
            return KeyEffect::Ignored;
        }

        let inserted = key_char
            .filter(|value| !value.is_empty())
            .or_else(|| (key.chars().count() == 1).then_some(key));
        match inserted {
            Some(text) if !text.contains('\u{7f}') && self.insert_text(text) => KeyEffect::Edited,
            _ => KeyEffect::Ignored,
        }
    }

    fn remove_char_range(&mut self, start: usize, end: usize) {
        let byte_start = byte_index_at_char(&self.value, start);
        let byte_end = byte_index_at_char(&self.value, end);
        self.value.replace_range(byte_start..byte_end, "");
        self.caret = start.min(self.len());
    }
}

pub fn byte_index_at_char(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(value.len())
}

fn line_col_from_char(value: &str, char_index: usize) -> (usize, usize) {
    let mut line = 0;
    let mut column = 0;
    for ch in value.chars().take(char_index) {
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    (line, column)
}

fn char_from_line_col(value: &str, target_line: usize, target_column: usize) -> usize {
    let mut index = 0;
    for (line, text) in value.split('\n').enumerate() {
        let line_len = text.chars().count();
        if line == target_line {
            return index + target_column.min(line_len);
        }
        index += line_len + 1;
    }
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> KeyModifiers {
        KeyModifiers::default()
    }

    #[test]
    fn typing_inserts_at_caret() {
        let mut state = TextEditState::new("Alce");
        state.move_to(2);
        assert_eq!(
            state.apply_keystroke("i", Some("i"), plain(), false),
            KeyEffect::Edited
        );
        assert_eq!(state.value, "Alice");
        assert_eq!(state.caret, 3);
    }

    #[test]
    fn space_uses_key_char() {
        let mut state = TextEditState::new("Alice");
        state.apply_keystroke("space", Some(" "), plain(), false);
        assert_eq!(state.value, "Alice ");
    }

    #[test]
    fn named_keys_without_text_are_ignored() {
        let mut state = TextEditState::new("x");
        assert_eq!(
            state.apply_keystroke("tab", None, plain(), false),
            KeyEffect::Ignored
        );
        assert_eq!(
            state.apply_keystroke("f5", None, plain(), false),
            KeyEffect::Ignored
        );
        assert_eq!(state.value, "x");
    }

    #[test]
    fn modified_keystrokes_do_not_insert() {
        let mut state = TextEditState::new("x");
        let ctrl = KeyModifiers {
            control: true,
            ..KeyModifiers::default()
        };
        assert_eq!(
            state.apply_keystroke("a", Some("a"), ctrl, false),
            KeyEffect::Ignored
        );
        assert_eq!(state.value, "x");
    }

    #[test]
    fn backspace_and_delete_respect_bounds() {
        let mut state = TextEditState::new("ab");
        assert_eq!(
            state.apply_keystroke("delete", None, plain(), false),
            KeyEffect::Ignored
        );
        assert_eq!(
            state.apply_keystroke("backspace", None, plain(), false),
            KeyEffect::Edited
        );
        assert_eq!(state.value, "a");

        state.move_to(0);
        assert_eq!(
            state.apply_keystroke("backspace", None, plain(), false),
            KeyEffect::Ignored
        );
        assert_eq!(
            state.apply_keystroke("delete", None, plain(), false),
            KeyEffect::Edited
        );
        assert!(state.is_empty());
    }

    #[test]
    fn editing_handles_multibyte_characters() {
        let mut state = TextEditState::new("Zoë");
        state.apply_keystroke("backspace", None, plain(), false);
        assert_eq!(state.value, "Zo");
        state.apply_keystroke("home", None, plain(), false);
        state.apply_keystroke("é", Some("é"), plain(), false);
        assert_eq!(state.value, "éZo");
        assert_eq!(state.before_caret(), "é");
        assert_eq!(state.after_caret(), "Zo");
    }

    #[test]
    fn enter_submits_single_line_and_breaks_multi_line() {
        let mut single = TextEditState::new("Alice");
        assert_eq!(
            single.apply_keystroke("enter", None, plain(), false),
            KeyEffect::Submit
        );
        assert_eq!(single.value, "Alice");

        let mut multi = TextEditState::new("Hi");
        assert_eq!(
            multi.apply_keystroke("enter", None, plain(), true),
            KeyEffect::Edited
        );
        assert_eq!(multi.value, "Hi\n");

        let cmd = KeyModifiers {
            platform: true,
            ..KeyModifiers::default()
        };
        assert_eq!(
            multi.apply_keystroke("enter", None, cmd, true),
            KeyEffect::Submit
        );
    }

    #[test]
    fn caret_moves_between_lines_keeping_column() {
        let mut state = TextEditState::new("first\nab\nthird");
        state.move_to(4);
        assert_eq!(
            state.apply_keystroke("down", None, plain(), true),
            KeyEffect::Moved
        );
        assert_eq!(state.caret, 8);
        state.apply_keystroke("down", None, plain(), true);
        assert_eq!(state.caret, 11);
        state.apply_keystroke("up", None, plain(), true);
        state.apply_keystroke("up", None, plain(), true);
        assert_eq!(state.caret, 2);
        assert_eq!(
            state.apply_keystroke("up", None, plain(), false),
            KeyEffect::Ignored
        );
    }

    #[test]
    fn horizontal_moves_clamp_to_text() {
        let mut state = TextEditState::new("ab");
        assert_eq!(
            state.apply_keystroke("right", None, plain(), false),
            KeyEffect::Ignored
        );
        assert_eq!(
            state.apply_keystroke("left", None, plain(), false),
            KeyEffect::Moved
        );
        assert_eq!(
            state.apply_keystroke("home", None, plain(), false),
            KeyEffect::Moved
        );
        assert_eq!(state.caret, 0);
        assert_eq!(
            state.apply_keystroke("end", None, plain(), false),
            KeyEffect::Moved
        );
        assert_eq!(state.caret, 2);
    }

    #[test]
    fn paste_flattens_line_breaks_in_single_line_fields() {
        let mut state = TextEditState::new("Al");
        assert!(state.paste("ice\r\nSmith\nJr", false));
        assert_eq!(state.value, "Alice Smith Jr");
        assert_eq!(state.caret, state.len());

        let mut message = TextEditState::new("");
        assert!(message.paste("one\r\ntwo\rthree", true));
        assert_eq!(message.value, "one\ntwo\nthree");

        assert!(!state.paste("", false));
    }

    #[test]
    fn set_value_moves_caret_to_end() {
        let mut state = TextEditState::new("abc");
        state.move_to(1);
        state.set_value("");
        assert_eq!(state, TextEditState::default());
    }
}
