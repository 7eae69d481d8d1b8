//! Help overlay listing the active key bindings.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::center_rect;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the overlay centered over `area`.
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let popup = center_rect(area, 64, 24);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Keys - {} preset ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [body, footer] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(inner);

        frame.render_widget(
            Paragraph::new(binding_lines(keymap)).wrap(Wrap { trim: false }),
            body,
        );
        frame.render_widget(
            Paragraph::new(format!(
                "Edit keybindings in: {}\nPress any key to close",
                config_path
            ))
            .style(t.muted_style())
            .centered()
            .wrap(Wrap { trim: true }),
            footer,
        );

        Ok(())
    }
}

/// Bindings grouped by action category, in first-seen category order.
fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
    let t = theme();
    let bindings = keymap.all_bindings();

    let mut categories: Vec<&'static str> = Vec::new();
    for binding in &bindings {
        let category = binding.action.category();
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    let mut lines = Vec::new();
    for category in categories {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!(" {}", category),
            t.title_style().add_modifier(Modifier::UNDERLINED),
        )));
        for binding in bindings.iter().filter(|b| b.action.category() == category) {
            lines.push(Line::from(vec![
                Span::styled(format!("   {:12}", binding.display()), t.emphasis_style()),
                Span::styled(binding.action.description(), t.text_style()),
            ]));
        }
    }
    lines
}
