use crate::route::Route;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Header height: border, breadcrumb, border
pub const HEADER_HEIGHT: u16 = 3;

/// Common header: app title plus the navigation breadcrumb
pub struct Header;

impl Header {
    /// Render the header.
    ///
    /// The breadcrumb lists the stack root first; the active route is bold.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, stack: &[Route]) -> Result<u16> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).split(inner);
        frame.render_widget(Paragraph::new(breadcrumb(stack)), chunks[0]);
        frame.render_widget(
            Paragraph::new(format!("depth {}", stack.len()))
                .style(t.muted_style())
                .right_aligned(),
            chunks[1],
        );

        Ok(HEADER_HEIGHT)
    }
}

/// "MAIN › SETTING › USER_PROFILE", each segment in its accent color
pub fn breadcrumb(stack: &[Route]) -> Line<'static> {
    let t = theme();
    let mut spans = Vec::with_capacity(stack.len() * 2);
    for (i, route) in stack.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", t.muted_style()));
        }
        let mut style = t.accent_style(*route);
        if i + 1 == stack.len() {
            style = style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(route.id(), style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumb_text() {
        let line = breadcrumb(&[Route::Main, Route::Setting, Route::UserProfile]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "MAIN › SETTING › USER_PROFILE");
    }

    #[test]
    fn test_breadcrumb_bolds_active_route() {
        let line = breadcrumb(&[Route::Main, Route::Login]);
        let last = line.spans.last().unwrap();
        assert!(last.style.add_modifier.contains(Modifier::BOLD));
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }
}
