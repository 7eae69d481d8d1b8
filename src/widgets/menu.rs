//! Card-style menu of route buttons.
//!
//! Each route is drawn as a block of solid accent color, one card per
//! route, sharing the available height evenly the way a column of
//! weighted buttons would.

use crate::route::Route;
use crate::styles::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

/// Minimum height of one card (padding + label + padding)
const MIN_CARD_HEIGHT: u16 = 3;
/// Blank rows between cards
const CARD_GAP: u16 = 1;

/// State for the Menu widget
#[derive(Debug, Default, Clone)]
pub struct MenuState {
    selected: Option<usize>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

/// Menu widget rendering one card per route
#[derive(Debug, Clone)]
pub struct Menu {
    routes: Vec<Route>,
}

impl Menu {
    pub fn new(routes: &[Route]) -> Self {
        Self {
            routes: routes.to_vec(),
        }
    }

    /// Area occupied by each card, paired with its index.
    ///
    /// Cards that don't fit are left out.
    pub fn card_areas(&self, area: Rect) -> Vec<(Rect, usize)> {
        let count = self.routes.len() as u16;
        if count == 0 {
            return Vec::new();
        }
        let fits = area.height / (MIN_CARD_HEIGHT + CARD_GAP);
        let shown = count.min(fits.max(1));
        let rows = Layout::vertical(vec![Constraint::Fill(1); shown as usize])
            .spacing(CARD_GAP)
            .split(area);

        rows.iter()
            .copied()
            .enumerate()
            .filter(|(_, rect)| rect.height > 0 && rect.height >= MIN_CARD_HEIGHT.min(area.height))
            .map(|(i, rect)| (rect, i))
            .collect()
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();

        for (card, i) in self.card_areas(area) {
            let route = self.routes[i];
            let is_selected = state.selected == Some(i);
            let style = t.button_style(route, is_selected);

            buf.set_style(card, style);

            let marker = if is_selected { "▶ " } else { "  " };
            let label = Line::from(vec![
                Span::styled(marker, style),
                Span::styled(route.button_text(), style),
            ])
            .centered();

            let middle = Rect::new(card.x, card.y + card.height / 2, card.width, 1);
            label.render(middle, buf);

            if is_selected && card.width > 0 {
                // Left edge bar so selection survives no-color mode.
                for y in card.y..card.y + card.height {
                    buf[(card.x, y)].set_symbol("▌").set_style(style);
                }
            }
        }
    }
}
