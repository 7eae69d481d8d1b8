//! Bordered push button.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// A single-line label in a rounded border.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    style: Style,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: Style::default(),
            focused: false,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Width and height needed to show the whole label.
    pub fn size(&self) -> (u16, u16) {
        (Line::from(self.label).width() as u16 + 6, 3)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_type = if self.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(self.style)
            .style(self.style);
        Paragraph::new(self.label)
            .centered()
            .block(block)
            .render(area, buf);
    }
}
