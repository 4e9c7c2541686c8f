/// A minimal multiline text buffer for the in-app add/edit surfaces.
/// Characters append at the end; Backspace pops. Banners are short, so a
/// full cursor model is not worth its weight here.
#[derive(Default, Clone)]
pub(crate) struct TextEntry {
    pub(crate) text: String,
}

impl TextEntry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seed the buffer with existing text when editing.
    pub(crate) fn with_text<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    pub(crate) fn push_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.text.push(ch);
        }
    }

    pub(crate) fn newline(&mut self) {
        self.text.push('\n');
    }

    pub(crate) fn backspace(&mut self) {
        self.text.pop();
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// State carried by the delete confirmation modal.
#[derive(Clone)]
pub(crate) struct ConfirmDelete {
    pub(crate) id: i64,
}
