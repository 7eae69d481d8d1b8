use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Footer height: top border plus one line of hints
pub const FOOTER_HEIGHT: u16 = 2;

/// Common footer showing key hints
pub struct Footer;

impl Footer {
    /// Render hints written as `"keys: label | keys: label"`.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(hint_line(text)).centered(), inner);

        Ok(FOOTER_HEIGHT)
    }
}

fn hint_line(text: &str) -> Line<'_> {
    let t = theme();
    let mut spans = Vec::new();
    for (i, part) in text.split(" | ").enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", t.muted_style()));
        }
        match part.split_once(": ") {
            Some((keys, label)) => {
                spans.push(Span::styled(keys, t.emphasis_style()));
                spans.push(Span::styled(": ", t.muted_style()));
                spans.push(Span::styled(label, t.text_style()));
            }
            None => spans.push(Span::styled(part, t.text_style())),
        }
    }
    Line::from(spans)
}
