/// "Select first N rows" panel
///
/// A toggle button that opens a small panel with a number input and an
/// Apply button. Validation errors are shown inline and keep the panel
/// open; a successful apply closes it and clears the input.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length};

use super::ERROR_COLOR;
use crate::state::selection::parse_count;
use crate::state::ValidationError;
use crate::Message;

#[derive(Debug, Default)]
pub struct SelectRowsPanel {
    open: bool,
    input: String,
    error: Option<ValidationError>,
}

impl SelectRowsPanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Open or close the panel, dropping any stale error
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.error = None;
    }

    pub fn edit(&mut self, input: String) {
        self.input = input;
        self.error = None;
    }

    /// Requested row count, `None` when the input is blank
    pub fn count(&self) -> Result<Option<i64>, ValidationError> {
        parse_count(&self.input)
    }

    /// Keep the panel open and show why the input was refused
    pub fn reject(&mut self, error: ValidationError) {
        self.error = Some(error);
    }

    /// Close after a successful apply
    pub fn finish(&mut self) {
        self.open = false;
        self.input.clear();
        self.error = None;
    }

    pub fn view(&self) -> Element<'_, Message> {
        let toggle = button(text("Select Rows")).on_press(Message::SelectRowsToggled).padding(8);

        if !self.open {
            return toggle.into();
        }

        let apply = button(text("Apply"))
            .on_press_maybe((!self.input.trim().is_empty()).then_some(Message::SelectRowsApplied))
            .padding(8);

        let mut panel = column![
            text("Select number of rows:").size(14),
            row![
                text_input("e.g. 5", &self.input)
                    .on_input(Message::SelectCountEdited)
                    .on_submit(Message::SelectRowsApplied)
                    .width(Length::Fixed(120.0)),
                apply,
            ]
            .spacing(8),
        ]
        .spacing(8);

        if let Some(error) = &self.error {
            panel = panel.push(text(error.to_string()).size(13).color(ERROR_COLOR));
        }

        column![toggle, container(panel).padding(12).style(container::rounded_box)]
            .spacing(6)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_clears_error() {
        let mut panel = SelectRowsPanel::default();
        panel.toggle();
        panel.reject(ValidationError::Missing);
        assert!(panel.error().is_some());

        panel.toggle();
        assert!(!panel.is_open());
        assert!(panel.error().is_none());
    }

    #[test]
    fn test_edit_clears_error() {
        let mut panel = SelectRowsPanel::default();
        panel.toggle();
        panel.reject(ValidationError::NotPositive(0));

        panel.edit("4".to_owned());
        assert_eq!(panel.count(), Ok(Some(4)));
        assert!(panel.error().is_none());
    }

    #[test]
    fn test_finish_resets_panel() {
        let mut panel = SelectRowsPanel::default();
        panel.toggle();
        panel.edit("3".to_owned());

        panel.finish();

        assert!(!panel.is_open());
        assert_eq!(panel.input(), "");
        assert_eq!(panel.count(), Ok(None));
    }
}
