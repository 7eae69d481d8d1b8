//! Main screen: one button per forward route.

use crate::keymap::Action;
use crate::navigation::RouteAction;
use crate::route::Route;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::utils::rect_contains;
use crate::widgets::{Menu, MenuState};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Padding};
use ratatui::Frame;

pub struct MainMenuScreen {
    routes: &'static [Route],
    state: MenuState,
    /// Card areas from the last render, for mouse hit testing
    card_areas: Vec<(Rect, usize)>,
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenuScreen {
    pub fn new() -> Self {
        let mut state = MenuState::new();
        state.select(Some(0));
        Self {
            routes: Route::forward_routes(),
            state,
            card_areas: Vec::new(),
        }
    }

    /// Route behind the selected button
    pub fn selected_route(&self) -> Option<Route> {
        self.state.selected().and_then(|i| self.routes.get(i).copied())
    }

    fn select(&mut self, index: usize) -> ScreenAction {
        let index = index.min(self.routes.len().saturating_sub(1));
        if self.state.selected() == Some(index) {
            return ScreenAction::None;
        }
        self.state.select(Some(index));
        ScreenAction::Update
    }

    fn open_selected(&mut self, routes: &mut RouteAction) -> ScreenAction {
        match self.selected_route() {
            Some(route) => {
                routes.navigate_to(route);
                ScreenAction::Update
            }
            None => ScreenAction::None,
        }
    }
}

impl Screen for MainMenuScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let block = Block::default().padding(Padding::uniform(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let menu = Menu::new(self.routes);
        self.card_areas = menu.card_areas(inner);
        frame.render_stateful_widget(menu, inner, &mut self.state);
        Ok(())
    }

    fn handle_event(
        &mut self,
        event: &Event,
        ctx: &ScreenContext,
        routes: &mut RouteAction,
    ) -> Result<ScreenAction> {
        let current = self.state.selected().unwrap_or(0);
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = ctx.config.keymap.get_action(key.code, key.modifiers) else {
                    return Ok(ScreenAction::None);
                };
                Ok(match action {
                    Action::MoveUp => self.select(current.saturating_sub(1)),
                    Action::MoveDown => self.select(current + 1),
                    Action::GoToTop => self.select(0),
                    Action::GoToEnd => self.select(self.routes.len()),
                    Action::Confirm => self.open_selected(routes),
                    Action::Back => {
                        routes.go_back();
                        ScreenAction::Update
                    }
                    Action::Quit | Action::Help => ScreenAction::None,
                })
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .card_areas
                    .iter()
                    .find(|(rect, _)| rect_contains(*rect, mouse.column, mouse.row))
                    .map(|(_, i)| *i);
                match hit {
                    Some(index) => {
                        self.select(index);
                        Ok(self.open_selected(routes))
                    }
                    None => Ok(ScreenAction::None),
                }
            }
            _ => Ok(ScreenAction::None),
        }
    }
}
