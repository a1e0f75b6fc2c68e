use tui_textarea::TextArea;

/// Single-line text entry for the city and focus-note modals.
#[derive(Default)]
pub struct InputState<'a> {
    pub text_area: TextArea<'a>,
}

impl<'a> InputState<'a> {
    #[must_use]
    pub fn prefilled(text: &str) -> Self {
        let mut text_area = TextArea::default();
        text_area.insert_str(text);
        Self { text_area }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text_area.lines().join("")
    }
}
