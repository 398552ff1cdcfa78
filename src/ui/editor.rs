//! Inline alias editor.
//!
//! Two single-line text fields (alias name and command) edited in place
//! inside a browser. Cursor positions count `char`s, not bytes, so editing
//! stays correct with multi-byte input.

use unicode_width::UnicodeWidthStr;

/// Single-line text buffer with a char-indexed cursor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    /// Cursor position in chars, `0..=char_len`.
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an initial value and the cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            buffer: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Byte offset of the char at `index` (or the end of the buffer).
    fn byte_offset(&self, index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(index)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete the char before the cursor.
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.buffer.remove(at);
    }

    /// Delete the char under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.buffer.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Terminal column of the cursor (wide chars count double).
    pub fn visual_cursor(&self) -> usize {
        self.buffer[..self.byte_offset(self.cursor)].width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Name,
    Command,
}

/// A committed alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDraft {
    pub name: String,
    pub command: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasEditor {
    pub name: TextField,
    pub command: TextField,
    pub focus: EditorField,
}

impl AliasEditor {
    /// Start editing with the command prefilled and the name focused.
    pub fn for_command(command: &str) -> Self {
        Self {
            name: TextField::new(),
            command: TextField::with_value(command),
            focus: EditorField::Name,
        }
    }

    pub fn focused(&self) -> &TextField {
        match self.focus {
            EditorField::Name => &self.name,
            EditorField::Command => &self.command,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            EditorField::Name => &mut self.name,
            EditorField::Command => &mut self.command,
        }
    }

    /// Focus the other field, placing its cursor at the end.
    pub fn switch_field(&mut self) {
        self.focus = match self.focus {
            EditorField::Name => EditorField::Command,
            EditorField::Command => EditorField::Name,
        };
        self.focused_mut().move_end();
    }

    pub fn can_commit(&self) -> bool {
        !self.name.is_empty() && !self.command.is_empty()
    }

    /// Take the alias out of the editor when both fields are filled. Both
    /// fields are cleared on success; on failure nothing changes.
    pub fn commit(&mut self) -> Option<AliasDraft> {
        if !self.can_commit() {
            return None;
        }
        let draft = AliasDraft {
            name: self.name.value().trim().to_string(),
            command: self.command.value().trim().to_string(),
        };
        self.clear();
        Some(draft)
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.command.clear();
        self.focus = EditorField::Name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_multibyte_at_start() {
        let mut field = TextField::with_value("cho");
        field.move_home();
        field.insert_char('é');
        assert_eq!(field.value(), "écho");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn test_delete_backward_and_forward_multibyte() {
        let mut field = TextField::with_value("añb");
        field.move_left(); // before 'b'
        field.delete_backward(); // removes 'ñ'
        assert_eq!(field.value(), "ab");
        assert_eq!(field.cursor(), 1);

        field.delete_forward(); // removes 'b'
        assert_eq!(field.value(), "a");
        assert_eq!(field.cursor(), 1);

        field.delete_forward(); // at end, no-op
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn test_delete_at_bounds_is_noop() {
        let mut field = TextField::new();
        field.delete_backward();
        field.delete_forward();
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_insert_str_in_middle() {
        let mut field = TextField::with_value("日本");
        field.move_left();
        field.insert_str("の");
        assert_eq!(field.value(), "日の本");
        assert_eq!(field.cursor(), 2);
        assert_eq!(field.visual_cursor(), 4);
    }

    #[test]
    fn test_cursor_matches_reference_splice() {
        // Compare against a Vec<char> reference model
        let inputs = ["é", "x", "🦀", "ß", "a"];
        let mut field = TextField::new();
        let mut reference: Vec<char> = Vec::new();
        let mut cursor = 0usize;

        for (i, s) in inputs.iter().cycle().take(40).enumerate() {
            match i % 5 {
                0 | 1 => {
                    let c = s.chars().next().unwrap();
                    field.insert_char(c);
                    reference.insert(cursor, c);
                    cursor += 1;
                }
                2 => {
                    field.move_left();
                    field.move_left();
                    cursor = cursor.saturating_sub(2);
                }
                3 => {
                    field.delete_backward();
                    if cursor > 0 {
                        cursor -= 1;
                        reference.remove(cursor);
                    }
                }
                _ => {
                    field.delete_forward();
                    if cursor < reference.len() {
                        reference.remove(cursor);
                    }
                }
            }
            let expected: String = reference.iter().collect();
            assert_eq!(field.value(), expected);
            assert_eq!(field.cursor(), cursor);
            assert!(field.cursor() <= field.char_len());
        }
    }

    #[test]
    fn test_switch_field_moves_cursor_to_end() {
        let mut editor = AliasEditor::for_command("git status");
        editor.name.insert_str("gs");
        editor.name.move_home();

        editor.switch_field();
        assert_eq!(editor.focus, EditorField::Command);
        assert_eq!(editor.command.cursor(), "git status".chars().count());

        editor.command.move_home();
        editor.switch_field();
        assert_eq!(editor.focus, EditorField::Name);
        assert_eq!(editor.name.cursor(), 2);
    }

    #[test]
    fn test_commit_requires_both_fields() {
        let mut editor = AliasEditor::for_command("git status");
        assert!(editor.commit().is_none());
        assert_eq!(editor.command.value(), "git status");

        editor.focused_mut().insert_str("gs");
        let draft = editor.commit().expect("both fields filled");
        assert_eq!(
            draft,
            AliasDraft {
                name: "gs".to_string(),
                command: "git status".to_string()
            }
        );
        assert_eq!(editor.name.value(), "");
        assert_eq!(editor.command.value(), "");
    }

    #[test]
    fn test_whitespace_only_field_is_empty() {
        let mut editor = AliasEditor::for_command("ls");
        editor.name.insert_str("   ");
        assert!(!editor.can_commit());
    }
}
