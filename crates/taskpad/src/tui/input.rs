use unicode_segmentation::UnicodeSegmentation;

/// Single-line text input with a grapheme-aware cursor.
///
/// The cursor is a byte offset into `value` that always sits on a
/// grapheme boundary, so arrow keys and backspace never split a
/// multi-byte cluster.
#[derive(Debug, Default, Clone)]
pub(super) struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Empty input.
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Input seeded with existing text, cursor at the end.
    pub(super) fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub(super) fn value(&self) -> &str {
        &self.value
    }

    /// Grapheme count before the cursor, used to place the terminal
    /// cursor when rendering.
    pub(super) fn cursor_offset(&self) -> usize {
        self.value[..self.cursor].graphemes(true).count()
    }

    pub(super) fn insert(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub(super) fn backspace(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.value.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    pub(super) fn move_left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    pub(super) fn move_right(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.cursor = end;
        }
    }

    pub(super) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub(super) fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .grapheme_indices(true)
            .last()
            .map(|(index, _)| index)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .graphemes(true)
            .next()
            .map(|grapheme| self.cursor + grapheme.len())
    }
}
